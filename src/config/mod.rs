pub mod cli;

use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const INPUT_FILE: &str = "berries.txt";
pub const DESCRIPTIONS_FILE: &str = "compote_descriptions.txt";
pub const VITAMINS_FILE: &str = "compote_vitamins.txt";

/// The file names are not configurable; they resolve against the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFiles;

impl ConfigProvider for FixedFiles {
    fn input_file(&self) -> &str {
        INPUT_FILE
    }

    fn descriptions_file(&self) -> &str {
        DESCRIPTIONS_FILE
    }

    fn vitamins_file(&self) -> &str {
        VITAMINS_FILE
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "berry-compote")]
#[command(about = "Groups berries from berries.txt into compotes and writes the compote reports")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        FixedFiles.input_file()
    }

    fn descriptions_file(&self) -> &str {
        FixedFiles.descriptions_file()
    }

    fn vitamins_file(&self) -> &str {
        FixedFiles.vitamins_file()
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_fixed_names() {
        let config = CliConfig::parse_from(["berry-compote"]);
        assert!(!config.verbose);
        assert!(!config.log_json);
        assert_eq!(config.input_file(), "berries.txt");
        assert_eq!(config.descriptions_file(), "compote_descriptions.txt");
        assert_eq!(config.vitamins_file(), "compote_vitamins.txt");
    }

    #[test]
    fn file_locations_are_not_flags() {
        assert!(CliConfig::try_parse_from(["berry-compote", "--dir", "/tmp"]).is_err());
        assert!(CliConfig::try_parse_from(["berry-compote", "--input", "other.txt"]).is_err());
    }
}
