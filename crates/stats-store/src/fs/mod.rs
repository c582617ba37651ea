pub mod reader;
pub mod writer;

pub use reader::read_record;
pub use writer::write_record;
