pub mod list_utils;

mod heading;
mod ordered_list;
mod paragraph;
mod unordered_list;

pub use heading::HeadingStage;
pub use ordered_list::OrderedListStage;
pub use paragraph::ParagraphStage;
pub use unordered_list::UnorderedListStage;

use crate::stage::Stage;

/// Returns the conversion pipeline in the order it must run
pub fn all_stages() -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(HeadingStage::new()),
        Box::new(UnorderedListStage::new()),
        Box::new(OrderedListStage::new()),
        Box::new(ParagraphStage::new()),
    ]
}
