//! Built-in normalization stages.
//!
//! In pipeline order:
//!
//! - `PreCleanStage`: separators to spaces, accent folding
//! - `BracketStage`: `(...)` then `[...]` removal
//! - `BlacklistStage`: category-scoped token removal
//! - `WhitespaceStage`, `ReleaseGroupStage`, `DiscStage`, `DashTrimStage`: repair passes
//! - `YearStage`: year re-insertion
//! - `ExtensionStage`, `TitleCaseStage`: presentation

mod blacklist;
mod brackets;
mod finish;
mod preclean;
mod repair;
mod year;

pub use blacklist::BlacklistStage;
pub use brackets::{strip_spans, BracketStage};
pub use finish::{title_case, ExtensionStage, TitleCaseStage};
pub use preclean::{fold_accents, PreCleanStage};
pub use repair::{DashTrimStage, DiscStage, ReleaseGroupStage, WhitespaceStage};
pub use year::{extract_year, YearStage};
