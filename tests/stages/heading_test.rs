use mdhtml_lib::HeadingStage;
use mdhtml_lib::stage::Stage;

#[test]
fn test_every_level() {
    let stage = HeadingStage::new();
    let content = "# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6";
    let result = stage.apply(content);
    assert_eq!(
        result,
        "<h1>H1</h1>\n<h2>H2</h2>\n<h3>H3</h3>\n<h4>H4</h4>\n<h5>H5</h5>\n<h6>H6</h6>"
    );
}

#[test]
fn test_level_seven_and_beyond() {
    let stage = HeadingStage::new();
    for level in 7..=10 {
        let line = format!("{} Title", "#".repeat(level));
        assert_eq!(stage.apply(&line), line);
    }
}

#[test]
fn test_heading_surrounding_whitespace_trimmed() {
    let stage = HeadingStage::new();
    assert_eq!(stage.apply("###    spaced out   "), "<h3>spaced out</h3>");
}

#[test]
fn test_heading_with_directives() {
    let stage = HeadingStage::new();
    assert_eq!(
        stage.apply("# [[Hello]] ((Cat))"),
        "<h1>8b1a9953c4611296a827abf8c47804d7 at</h1>"
    );
}

#[test]
fn test_line_count_preserved() {
    let stage = HeadingStage::new();
    let content = "# a\n\nb\n## c\n";
    assert_eq!(stage.apply(content).split('\n').count(), content.split('\n').count());
}

#[test]
fn test_full_pipeline_heading() {
    assert_eq!(mdhtml_lib::convert("## Section\n"), "<h2>Section</h2>\n");
}
