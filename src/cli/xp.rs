use std::collections::BTreeMap;

use anyhow::Result;
use ocvbot_core_types::ExperienceTable;

use crate::cli::output::OutputFormat;

pub fn cmd_xp(output: OutputFormat) -> Result<()> {
    let table = ExperienceTable::standard();
    match output {
        OutputFormat::Human => {
            println!("{:<16} {:>8}", "Item", "XP each");
            for (category, xp) in table.iter() {
                println!("{:<16} {:>8.1}", category, xp);
            }
        }
        OutputFormat::Json => {
            let map: BTreeMap<_, _> = table.iter().collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        OutputFormat::Yaml => {
            let map: BTreeMap<_, _> = table.iter().collect();
            print!("{}", serde_yaml::to_string(&map)?);
        }
    }
    Ok(())
}
