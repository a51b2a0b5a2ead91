use mdhtml_lib::utils::inline_spans::{rewrite_hash_directives, rewrite_inline, rewrite_strip_directives};

#[test]
fn test_bold_and_emphasis() {
    assert_eq!(rewrite_inline("**a** and __b__"), "<b>a</b> and <em>b</em>");
}

#[test]
fn test_unmatched_delimiters_never_fail() {
    assert_eq!(rewrite_inline("**bold"), "<b>bold");
    assert_eq!(rewrite_inline("__em"), "<em>em");
    assert_eq!(rewrite_inline("[[open"), "[[open");
    assert_eq!(rewrite_inline("((open"), "((open");
    assert_eq!(rewrite_inline("close]] close))"), "close]] close))");
}

#[test]
fn test_hash_directive_is_deterministic() {
    let first = rewrite_hash_directives("[[Hello]]");
    let second = rewrite_hash_directives("[[Hello]]");
    assert_eq!(first, "8b1a9953c4611296a827abf8c47804d7");
    assert_eq!(first, second);
    assert_eq!(first.len(), 32);
}

#[test]
fn test_two_hash_directives() {
    assert_eq!(
        rewrite_hash_directives("[[Hello]]-[[Hello]]"),
        "8b1a9953c4611296a827abf8c47804d7-8b1a9953c4611296a827abf8c47804d7"
    );
}

#[test]
fn test_strip_directive_is_case_insensitive() {
    assert_eq!(rewrite_strip_directives("((Core))"), "ore");
    assert_eq!(rewrite_strip_directives("((CcCcX))"), "X");
    assert_eq!(rewrite_strip_directives("((abc)) ((ACE))"), "ab AE");
}

#[test]
fn test_directive_content_sees_bold_tags() {
    // Bold runs first, so the asterisks inside the directive are already tags
    let expected = format!("{:x} <b>", md5::compute("<b>a</b>"));
    assert_eq!(rewrite_inline("[[**a**]] **"), expected);
}
