use crate::domain::model::{Berry, Compote};
use crate::utils::error::Result;

/// Named text files under one base location.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, contents: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_file(&self) -> &str;
    fn descriptions_file(&self) -> &str;
    fn vitamins_file(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Berry>>;
    fn transform(&self, berries: Vec<Berry>) -> Result<Vec<Compote>>;
    /// Returns the names of the files written, in write order.
    fn load(&self, compotes: &[Compote]) -> Result<Vec<String>>;
}
