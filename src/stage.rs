//! The `Stage` trait implemented by every block-level rewriter

use std::any::Any;

/// Broad kind of construct a stage looks for, used to skip stages
/// that cannot match anything in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageCategory {
    Heading,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// A whole-document rewrite step of the conversion pipeline.
///
/// `apply` receives the full text produced by the previous stage and returns
/// the full text for the next one. Implementations are total: no input, however
/// malformed, makes them fail.
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn category(&self) -> StageCategory;

    fn apply(&self, content: &str) -> String;

    fn as_any(&self) -> &dyn Any;
}
