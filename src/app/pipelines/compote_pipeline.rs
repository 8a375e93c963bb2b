use crate::core::grouping::create_compotes;
use crate::core::loader::load_berries;
use crate::core::report::{write_report, DescriptionReport, VitaminReport};
use crate::domain::model::{Berry, Compote};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct CompotePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CompotePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CompotePipeline<S, C> {
    fn extract(&self) -> Result<Vec<Berry>> {
        tracing::debug!("Reading data from {}", self.config.input_file());
        load_berries(&self.storage, self.config.input_file())
    }

    fn transform(&self, berries: Vec<Berry>) -> Result<Vec<Compote>> {
        Ok(create_compotes(berries))
    }

    fn load(&self, compotes: &[Compote]) -> Result<Vec<String>> {
        let descriptions = self.config.descriptions_file();
        write_report(&self.storage, &DescriptionReport, compotes, descriptions)?;

        let vitamins = self.config.vitamins_file();
        write_report(&self.storage, &VitaminReport, compotes, vitamins)?;

        Ok(vec![descriptions.to_string(), vitamins.to_string()])
    }
}
