use crate::stage::{Stage, StageCategory};
use crate::utils::rewrite_inline;
use regex::Regex;
use std::sync::LazyLock;

static ATX_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#+)(.*)$").unwrap());

/// Deepest heading level HTML has a tag for
const MAX_HEADING_LEVEL: usize = 6;

/// Rewrites `#`..`######` prefixed lines into `<h1>`..`<h6>` elements
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingStage;

impl HeadingStage {
    pub fn new() -> Self {
        Self
    }

    /// Convert a single line, returning `None` if it is not a heading
    pub fn convert_line(line: &str) -> Option<String> {
        let cap = ATX_HEADING_REGEX.captures(line)?;
        let level = cap.get(1)?.as_str().len();
        if level > MAX_HEADING_LEVEL {
            return None;
        }
        let content = cap.get(2).map_or("", |m| m.as_str()).trim();
        Some(format!("<h{level}>{}</h{level}>", rewrite_inline(content)))
    }
}

impl Stage for HeadingStage {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn description(&self) -> &'static str {
        "Headings: `#` to `######` become <h1> to <h6>"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Heading
    }

    fn apply(&self, content: &str) -> String {
        content
            .split('\n')
            .map(|line| Self::convert_line(line).unwrap_or_else(|| line.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
