//! Visual Perceiver - the perception port of the perception-action loop
//!
//! This crate provides:
//! - The [`VisualPerceiver`] port: single-shot `locate` and bounded `wait_for`
//! - A normalized cross-correlation [`TemplateMatcher`] over any [`FrameSource`]
//! - A needle cache so reference images are decoded once per path

pub mod cache;
pub mod errors;
pub mod matcher;
pub mod models;
pub mod visual;

// Re-exports
pub use cache::NeedleCache;
pub use errors::VisualError;
pub use matcher::{FrameSource, TemplateMatcher};
pub use models::*;
pub use visual::{poll_until, VisualPerceiver};
