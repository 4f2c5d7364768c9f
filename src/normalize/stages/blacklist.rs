//! Category-scoped blacklist filtering.

use crate::normalize::blacklist::matchers;
use crate::normalize::{Context, Stage};

/// Strips every enabled category's tokens, in table order.
///
/// Each removal runs on the output of the previous one, so an earlier
/// category can change what a later pattern sees.
pub struct BlacklistStage {
    _private: (),
}

impl BlacklistStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for BlacklistStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for BlacklistStage {
    fn name(&self) -> &'static str {
        "blacklist"
    }

    fn apply(&self, title: String, ctx: &Context<'_>) -> String {
        let mut title = title;
        for category in ctx.options.categories.active() {
            for m in matchers(category) {
                title = m.strip(&title);
            }
        }
        title
    }
}
