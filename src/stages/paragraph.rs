use crate::stage::{Stage, StageCategory};
use crate::utils::rewrite_inline;
use itertools::Itertools;

/// Separator between the source lines of one paragraph
const LINE_BREAK: &str = "<br/>";

/// Groups runs of plain lines into `<p>` blocks.
///
/// Lines that already look like a tag (`<...>` after trimming) end the current
/// paragraph and are emitted verbatim. Blank lines separate paragraphs and are
/// dropped. Every emitted line is terminated with `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphStage;

impl ParagraphStage {
    pub fn new() -> Self {
        Self
    }

    pub fn is_tag_line(trimmed: &str) -> bool {
        trimmed.starts_with('<') && trimmed.ends_with('>')
    }

    fn flush(paragraph: &mut Vec<&str>, output: &mut String) {
        if paragraph.is_empty() {
            return;
        }
        output.push_str("<p>");
        output.push_str(&paragraph.iter().map(|line| rewrite_inline(line)).join(LINE_BREAK));
        output.push_str("</p>\n");
        paragraph.clear();
    }
}

impl Stage for ParagraphStage {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn description(&self) -> &'static str {
        "Paragraphs: runs of plain lines become <p> blocks joined with <br/>"
    }

    fn category(&self) -> StageCategory {
        StageCategory::Paragraph
    }

    fn apply(&self, content: &str) -> String {
        let mut output = String::with_capacity(content.len() + content.len() / 4);
        let mut paragraph: Vec<&str> = Vec::new();

        for line in content.split('\n') {
            let trimmed = line.trim();
            if Self::is_tag_line(trimmed) {
                Self::flush(&mut paragraph, &mut output);
                output.push_str(line);
                output.push('\n');
            } else if trimmed.is_empty() {
                Self::flush(&mut paragraph, &mut output);
            } else {
                paragraph.push(trimmed);
            }
        }
        Self::flush(&mut paragraph, &mut output);

        output
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
