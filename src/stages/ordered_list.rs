use super::list_utils::{ListSyntax, wrap_list_blocks};
use crate::stage::{Stage, StageCategory};

pub(crate) const ORDERED_SYNTAX: ListSyntax = ListSyntax {
    marker: "* ",
    open_tag: "<ol>",
    close_tag: "</ol>",
};

/// Wraps runs of `* ` lines in `<ol>` blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedListStage;

impl OrderedListStage {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for OrderedListStage {
    fn name(&self) -> &'static str {
        "ordered-list"
    }

    fn description(&self) -> &'static str {
        "Ordered lists: runs of `* ` lines become <ol><li>...</li></ol>"
    }

    fn category(&self) -> StageCategory {
        StageCategory::OrderedList
    }

    fn apply(&self, content: &str) -> String {
        wrap_list_blocks(content, &ORDERED_SYNTAX)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
