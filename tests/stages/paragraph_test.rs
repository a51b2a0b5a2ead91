use mdhtml_lib::ParagraphStage;
use mdhtml_lib::stage::Stage;

#[test]
fn test_paragraph_merge() {
    let stage = ParagraphStage::new();
    assert_eq!(
        stage.apply("line1\nline2\n\nline3"),
        "<p>line1<br/>line2</p>\n<p>line3</p>\n"
    );
}

#[test]
fn test_single_line_has_no_break() {
    let stage = ParagraphStage::new();
    assert_eq!(stage.apply("only"), "<p>only</p>\n");
}

#[test]
fn test_raw_html_line_kept_verbatim() {
    let stage = ParagraphStage::new();
    assert_eq!(stage.apply("  <div class=\"x\">  "), "  <div class=\"x\">  \n");
}

#[test]
fn test_crlf_lines() {
    assert_eq!(mdhtml_lib::convert("a\r\nb\r\n\r\nc"), "<p>a<br/>b</p>\n<p>c</p>\n");
}

#[test]
fn test_heading_ends_paragraph() {
    assert_eq!(
        mdhtml_lib::convert("text\n# Title\nmore"),
        "<p>text</p>\n<h1>Title</h1>\n<p>more</p>\n"
    );
}
