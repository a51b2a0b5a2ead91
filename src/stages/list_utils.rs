//! Shared block wrapping for the two list stages

use crate::utils::rewrite_inline;

/// Marker and wrapper tags for one kind of list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSyntax {
    pub marker: &'static str,
    pub open_tag: &'static str,
    pub close_tag: &'static str,
}

/// Output lines plus whether the last emitted line is inside an open list
#[derive(Debug, Default)]
struct ListState {
    lines: Vec<String>,
    in_list: bool,
}

/// Return the `<li>` element for `line` if its trimmed form starts with the marker
pub fn list_item(line: &str, syntax: &ListSyntax) -> Option<String> {
    let item = line.trim().strip_prefix(syntax.marker)?;
    Some(format!("<li>{}</li>", rewrite_inline(item.trim())))
}

/// Wrap every maximal run of list-item lines in `open_tag`/`close_tag` lines.
///
/// Any other line, blank or not, ends the run. A run still open at the end of
/// the document is closed after its last item.
pub fn wrap_list_blocks(content: &str, syntax: &ListSyntax) -> String {
    let state = content.split('\n').fold(ListState::default(), |mut state, line| {
        match list_item(line, syntax) {
            Some(item) => {
                if !state.in_list {
                    state.lines.push(syntax.open_tag.to_string());
                }
                state.lines.push(item);
                state.in_list = true;
            }
            None => {
                if state.in_list {
                    state.lines.push(syntax.close_tag.to_string());
                }
                state.lines.push(line.to_string());
                state.in_list = false;
            }
        }
        state
    });

    let mut lines = state.lines;
    if state.in_list {
        lines.push(syntax.close_tag.to_string());
    }
    lines.join("\n")
}
