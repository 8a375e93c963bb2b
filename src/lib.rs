pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, FixedFiles};

pub use crate::core::{etl::CompoteEngine, CompotePipeline};
pub use domain::model::{Berry, Compote};
pub use utils::error::{CompoteError, Result};
