//! Stage trait.

use super::Context;

/// A single step of the normalization pipeline.
///
/// Each stage takes the working string produced by the previous stage and
/// returns the string handed to the next one. Stages never fail: every one
/// of them has a defined result for empty or fully-stripped input.
///
/// # Implementation Notes
///
/// - Stages only read the [`Context`]; they never see later stages' output
/// - Matching is case-insensitive, but case must be preserved until title-casing
pub trait Stage: Send + Sync {
    /// The name of this stage (for debugging/logging).
    fn name(&self) -> &'static str;

    /// Transform the working string.
    fn apply(&self, title: String, ctx: &Context<'_>) -> String;
}
