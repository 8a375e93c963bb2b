use crate::domain::model::Compote;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::collections::HashSet;

pub trait Report {
    fn title(&self) -> &'static str;
    fn render_block(&self, compote: &Compote) -> String;

    /// Blocks separated by a blank line, trailing whitespace trimmed.
    fn render(&self, compotes: &[Compote]) -> String {
        let mut output = String::new();
        for compote in compotes {
            output.push_str(&self.render_block(compote));
            output.push('\n');
        }
        output.trim_end().to_string()
    }
}

pub struct DescriptionReport;

impl Report for DescriptionReport {
    fn title(&self) -> &'static str {
        "descriptions"
    }

    fn render_block(&self, compote: &Compote) -> String {
        format!(
            "{}\nBerries: {}\nNumber of berries: {}\n",
            compote.name,
            compote.berry_names().collect::<Vec<_>>().join(", "),
            compote.berry_count()
        )
    }
}

pub struct VitaminReport;

impl Report for VitaminReport {
    fn title(&self) -> &'static str {
        "vitamins"
    }

    fn render_block(&self, compote: &Compote) -> String {
        format!(
            "{}\nVitamins: {}\n",
            compote.name,
            unique_vitamins(compote).join(", ")
        )
    }
}

/// Every vitamin of the compote once, in first-seen order.
pub fn unique_vitamins(compote: &Compote) -> Vec<&str> {
    let mut seen = HashSet::new();
    compote
        .berries
        .iter()
        .flat_map(|b| b.vitamins.iter().map(String::as_str))
        .filter(|v| seen.insert(*v))
        .collect()
}

/// Renders `report` and persists it under `path`. Failures are logged before
/// being handed back to the caller.
pub fn write_report<S: Storage, R: Report>(
    storage: &S,
    report: &R,
    compotes: &[Compote],
    path: &str,
) -> Result<()> {
    let output = report.render(compotes);
    tracing::debug!("Writing {} report ({} bytes) to {}", report.title(), output.len(), path);

    storage.write_file(path, &output).inspect_err(|e| {
        tracing::error!("Error!: {}", e);
    })
}
