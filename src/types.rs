//! Shared types and enums used across tutil.
//! Includes the closed `Operation` set, the comment stripper's `CommentMode`,
//! and `ExtensionClass` for validated targets.
use clap::ValueEnum;

/// The fixed set of operations the tool can run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug)]
pub enum Operation {
    /// Put every sentence on its own line
    Separator,
    /// Strip `%` comments
    Uncommenter,
    /// List available operations
    Lister,
    /// Print usage
    #[value(alias = "testscript")]
    Help,
}

impl Operation {
    /// Resolves an operation by its command-line name (aliases included).
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, false).ok()
    }

    /// Canonical command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Separator => "separator",
            Operation::Uncommenter => "uncommenter",
            Operation::Lister => "lister",
            Operation::Help => "help",
        }
    }

    /// True for operations that rewrite target files.
    pub fn modifies_files(&self) -> bool {
        matches!(self, Operation::Separator | Operation::Uncommenter)
    }

    pub fn all() -> &'static [Operation] {
        Operation::value_variants()
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the comment stripper does with lines that held nothing but a comment.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CommentMode {
    LeaveBlank,
    Remove,
}

impl CommentMode {
    /// Interprets the operator's answer to the mode question.
    /// `l` leaves blank lines, `a` aborts (`None`), anything else removes.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "a" => None,
            "l" => Some(CommentMode::LeaveBlank),
            _ => Some(CommentMode::Remove),
        }
    }
}

impl std::fmt::Display for CommentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentMode::LeaveBlank => write!(f, "leave blank"),
            CommentMode::Remove => write!(f, "remove"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ExtensionClass {
    Whitelisted,
    Other,
}
