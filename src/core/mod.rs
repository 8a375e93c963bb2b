pub mod etl;
pub mod grouping;
pub mod loader;
pub mod parser;
pub mod report;

pub use crate::app::pipelines::compote_pipeline::CompotePipeline;
pub use crate::domain::model::{Berry, Compote};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
