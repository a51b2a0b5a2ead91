mod heading_test;
mod inline_spans_test;
mod list_test;
mod paragraph_test;
