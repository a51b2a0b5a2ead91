//! Shared text utilities used by the block stages

pub mod inline_spans;

pub use inline_spans::rewrite_inline;
