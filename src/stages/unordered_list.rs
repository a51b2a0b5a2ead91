use super::list_utils::{ListSyntax, wrap_list_blocks};
use crate::stage::{Stage, StageCategory};

pub(crate) const UNORDERED_SYNTAX: ListSyntax = ListSyntax {
    marker: "- ",
    open_tag: "<ul>",
    close_tag: "</ul>",
};

/// Wraps runs of `- ` lines in `<ul>` blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct UnorderedListStage;

impl UnorderedListStage {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for UnorderedListStage {
    fn name(&self) -> &'static str {
        "unordered-list"
    }

    fn description(&self) -> &'static str {
        "Unordered lists: runs of `- ` lines become <ul><li>...</li></ul>"
    }

    fn category(&self) -> StageCategory {
        StageCategory::UnorderedList
    }

    fn apply(&self, content: &str) -> String {
        wrap_list_blocks(content, &UNORDERED_SYNTAX)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
