use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Berry {
    pub name: String,
    pub color: String,
    /// Input order, duplicates kept.
    pub vitamins: Vec<String>,
}

impl Berry {
    pub fn new(name: impl Into<String>, color: impl Into<String>, vitamins: Vec<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            vitamins,
        }
    }

    pub fn compote_name(&self) -> String {
        compote_name_for(&self.color)
    }
}

pub fn compote_name_for(color: &str) -> String {
    format!("{} compote", color)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compote {
    pub name: String,
    pub berries: Vec<Berry>,
}

impl Compote {
    pub fn new(name: String) -> Self {
        Self {
            name,
            berries: Vec::new(),
        }
    }

    pub fn add_berry(&mut self, berry: Berry) {
        self.berries.push(berry);
    }

    pub fn berry_count(&self) -> usize {
        self.berries.len()
    }

    pub fn berry_names(&self) -> impl Iterator<Item = &str> {
        self.berries.iter().map(|b| b.name.as_str())
    }
}
