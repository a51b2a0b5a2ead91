pub mod config;
pub mod exit_codes;
pub mod file_processor;
pub mod stage;
pub mod stages;
pub mod utils;

pub use stages::*;

use crate::stage::{Stage, StageCategory};
use std::time::Instant;

/// Content characteristics for skipping stages that would not change anything
#[derive(Debug, Default)]
struct ContentCharacteristics {
    has_headings: bool,        // a line starting with #
    has_unordered_items: bool, // "- " anywhere
    has_ordered_items: bool,   // "* " anywhere
}

impl ContentCharacteristics {
    fn analyze(content: &str) -> Self {
        let mut chars = Self { ..Default::default() };

        for line in content.split('\n') {
            if !chars.has_headings && line.starts_with('#') {
                chars.has_headings = true;
            }
            if !chars.has_unordered_items && line.contains("- ") {
                chars.has_unordered_items = true;
            }
            if !chars.has_ordered_items && line.contains("* ") {
                chars.has_ordered_items = true;
            }
        }

        chars
    }

    /// Check if a stage is the identity on content with these characteristics
    fn should_skip_stage(&self, stage: &dyn Stage) -> bool {
        match stage.category() {
            StageCategory::Heading => !self.has_headings,
            StageCategory::UnorderedList => !self.has_unordered_items,
            StageCategory::OrderedList => !self.has_ordered_items,
            // Always runs: it decides the final block structure
            StageCategory::Paragraph => false,
        }
    }
}

/// Convert a Markdown document to HTML with the default pipeline
pub fn convert(content: &str) -> String {
    convert_with(content, &stages::all_stages())
}

/// Run `content` through `stages` in order, each consuming the previous output.
///
/// Characteristics are computed on each stage's own input, since a caller
/// supplied stage may emit constructs a later stage rewrites.
pub fn convert_with(content: &str, stages: &[Box<dyn Stage>]) -> String {
    let mut text = content.to_string();
    let mut skipped = 0;

    for stage in stages {
        if ContentCharacteristics::analyze(&text).should_skip_stage(stage.as_ref()) {
            skipped += 1;
            continue;
        }

        let stage_start = Instant::now();
        text = stage.apply(&text);
        log::debug!("Stage {} took {:?}", stage.name(), stage_start.elapsed());
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} of {} stages based on content analysis", stages.len());
    }

    text
}
