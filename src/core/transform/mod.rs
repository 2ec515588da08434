//! Line-rewriting transforms. Each one is a pure function from input lines to
//! a `TransformResult`; reading and writing files is left to the caller.
pub mod separator;
pub mod uncommenter;

pub use separator::split_sentences;
pub use uncommenter::strip_comments;

use crate::types::{CommentMode, Operation};

/// Output lines plus the number of edits that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformResult {
    pub lines: Vec<String>,
    pub edits: usize,
}

/// A transform selected for a run, with any upfront choice already made.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Transform {
    Separator,
    Uncommenter(CommentMode),
}

impl Transform {
    pub fn apply<S: AsRef<str>>(&self, lines: &[S]) -> TransformResult {
        match self {
            Transform::Separator => split_sentences(lines),
            Transform::Uncommenter(mode) => strip_comments(lines, *mode),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Transform::Separator => Operation::Separator,
            Transform::Uncommenter(_) => Operation::Uncommenter,
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.operation())
    }
}
