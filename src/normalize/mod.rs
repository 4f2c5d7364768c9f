//! Movie title normalization pipeline.
//!
//! The pipeline runs a fixed series of stages over a file name, each stage
//! taking the previous one's output. Nothing here can fail: the worst case is
//! an empty string or a bare extension.
//!
//! # Example
//!
//! ```
//! use moviename::normalize::{normalize, NormalizeOptions};
//!
//! let title = normalize(
//!     "The.Movie.Name.2012.BluRay.720p.x264-GROUP.mkv",
//!     &NormalizeOptions::default(),
//! );
//! assert_eq!(title, "The Movie Name (2012)");
//! ```

pub mod blacklist;
mod stage;
pub mod stages;
mod types;


use once_cell::sync::Lazy;
use tracing::debug;

pub use stage::Stage;
pub use stages::{extract_year, fold_accents, strip_spans, title_case};
pub use types::{
    basename, Category, CategorySet, Context, NormalizeOptions, SplitName, StageTrace, WILDCARD,
};

use stages::{
    BlacklistStage, BracketStage, DashTrimStage, DiscStage, ExtensionStage, PreCleanStage,
    ReleaseGroupStage, TitleCaseStage, WhitespaceStage, YearStage,
};

static STANDARD: Lazy<Pipeline> = Lazy::new(Pipeline::standard);

/// A pipeline of stages applied in order.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline (no stages).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create a pipeline with the given stages.
    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) {
        self.stages.push(Box::new(stage));
    }

    /// Get the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Stage names, in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over `input` and return the final string.
    pub fn run(&self, input: &str, options: &NormalizeOptions) -> String {
        let ctx = Context::new(input, options);
        self.stages.iter().fold(String::new(), |title, stage| {
            let title = stage.apply(title, &ctx);
            debug!(stage = stage.name(), output = %title, "stage applied");
            title
        })
    }

    /// Like [`Pipeline::run`], but keep every stage's output.
    pub fn trace(&self, input: &str, options: &NormalizeOptions) -> Vec<StageTrace> {
        let ctx = Context::new(input, options);
        let mut title = String::new();
        let mut steps = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            title = stage.apply(title, &ctx);
            steps.push(StageTrace {
                stage: stage.name(),
                output: title.clone(),
            });
        }

        steps
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// The standard pipeline.
    ///
    /// Stages: preclean → brackets → blacklist → whitespace → release_group →
    /// disc → dash_trim → year → extension → title_case
    pub fn standard() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(PreCleanStage::new());
        pipeline.add_stage(BracketStage::new());
        pipeline.add_stage(BlacklistStage::new());
        pipeline.add_stage(WhitespaceStage::new());
        pipeline.add_stage(ReleaseGroupStage::new());
        pipeline.add_stage(DiscStage::new());
        pipeline.add_stage(DashTrimStage::new());
        pipeline.add_stage(YearStage::new());
        pipeline.add_stage(ExtensionStage::new());
        pipeline.add_stage(TitleCaseStage::new());
        pipeline
    }
}

/// Normalize a file name with the standard pipeline.
pub fn normalize(input: &str, options: &NormalizeOptions) -> String {
    STANDARD.run(input, options)
}

/// Normalize a file name with default options and every blacklist enabled.
pub fn movie_name_from_file(input: &str) -> String {
    normalize(input, &NormalizeOptions::default())
}
