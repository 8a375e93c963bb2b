use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Loading,
    Grouping,
    Writing,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub berries: usize,
    pub compotes: usize,
    pub outputs: Vec<String>,
}

pub struct CompoteEngine<P: Pipeline> {
    pipeline: P,
    stage: Stage,
}

impl<P: Pipeline> CompoteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            stage: Stage::Idle,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let result = self.run_stages();
        if result.is_err() {
            self.stage = Stage::Failed;
        }
        result
    }

    fn run_stages(&mut self) -> Result<RunSummary> {
        self.stage = Stage::Loading;
        tracing::info!("Reading berry data...");
        let berries = self.pipeline.extract()?;
        let berry_count = berries.len();
        tracing::info!("Success! Read {} berries", berry_count);

        self.stage = Stage::Grouping;
        tracing::info!("Creating compotes...");
        let compotes = self.pipeline.transform(berries)?;
        tracing::info!("Created {} compotes", compotes.len());

        self.stage = Stage::Writing;
        tracing::info!("Writing output files...");
        let outputs = self.pipeline.load(&compotes)?;
        tracing::info!("Wrote {}", outputs.join(", "));

        self.stage = Stage::Done;
        tracing::info!("Completed.");

        Ok(RunSummary {
            berries: berry_count,
            compotes: compotes.len(),
            outputs,
        })
    }
}
