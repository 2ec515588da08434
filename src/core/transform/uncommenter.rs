//! `%` comment stripping with `\%` escapes.
use super::TransformResult;
use crate::types::CommentMode;

const COMMENT: char = '%';
const ESCAPE: char = '\\';

/// Strips `%` comments from every line.
///
/// A `%` preceded by a backslash is literal. Lines whose first non-blank
/// character opens a comment are dropped in `Remove` mode; in `LeaveBlank` mode
/// they keep whatever precedes the marker (an empty line when the marker is in
/// column 0). Each truncated or dropped line counts as one edit.
pub fn strip_comments<S: AsRef<str>>(lines: &[S], mode: CommentMode) -> TransformResult {
    let mut result = TransformResult::default();

    for line in lines {
        let line = line.as_ref();

        if mode == CommentMode::Remove && line.trim_start().starts_with(COMMENT) {
            result.edits += 1;
            continue;
        }

        match comment_start(line) {
            Some(0) => {
                if mode == CommentMode::LeaveBlank {
                    result.lines.push(String::new());
                }
                result.edits += 1;
            }
            Some(i) => {
                result.lines.push(line[..i].to_string());
                result.edits += 1;
            }
            None => result.lines.push(line.to_string()),
        }
    }

    result
}

/// Byte offset of the first `%` not immediately preceded by a backslash.
fn comment_start(line: &str) -> Option<usize> {
    let mut prev = None;
    for (i, c) in line.char_indices() {
        if c == COMMENT && prev != Some(ESCAPE) {
            return Some(i);
        }
        prev = Some(c);
    }
    None
}
