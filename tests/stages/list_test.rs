use mdhtml_lib::stage::Stage;
use mdhtml_lib::{OrderedListStage, UnorderedListStage};

#[test]
fn test_unordered_list_wrapping() {
    let stage = UnorderedListStage::new();
    assert_eq!(stage.apply("- a\n- b\n"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
}

#[test]
fn test_ordered_list_closed_at_end() {
    let stage = OrderedListStage::new();
    assert_eq!(stage.apply("* x\n* y"), "<ol>\n<li>x</li>\n<li>y</li>\n</ol>");
}

#[test]
fn test_indented_items_are_items() {
    let stage = UnorderedListStage::new();
    assert_eq!(stage.apply("   - a"), "<ul>\n<li>a</li>\n</ul>");
}

#[test]
fn test_mixed_lists_through_pipeline() {
    let result = mdhtml_lib::convert("- a\n* b\n- c\n");
    assert_eq!(
        result,
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n<ul>\n<li>c</li>\n</ul>\n"
    );
}

#[test]
fn test_list_followed_by_paragraph() {
    let result = mdhtml_lib::convert("- item\nafter list\n");
    assert_eq!(result, "<ul>\n<li>item</li>\n</ul>\n<p>after list</p>\n");
}

#[test]
fn test_marker_without_space_is_text() {
    assert_eq!(mdhtml_lib::convert("-a\n*b\n"), "<p>-a<br/>*b</p>\n");
}
