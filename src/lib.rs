#![doc = r#"
tutil — batch editing helpers for prose and LaTeX sources.

This crate provides the pieces behind the `tutil` CLI: two line transforms
(one sentence per line, `%` comment stripping), a validator for target files,
timestamped backups, and an orchestrator that ties them together so that no
file is rewritten without a backup unless explicitly forced.

Quick start: split sentences in a file
--------------------------------------
```rust,no_run
use std::path::Path;
use tutil::{run_file, FileOutcome, RunOptions, StdinPrompt, Transform};

let outcome = run_file(
    &Transform::Separator,
    Path::new("chapter.tex"),
    &RunOptions::default(),
    &mut StdinPrompt,
);
if let FileOutcome::Modified { edits, backup, .. } = outcome {
    println!("{edits} lines split, backup at {backup:?}");
}
```

Pure transforms
---------------
```rust
use tutil::{split_sentences, strip_comments, CommentMode};

let out = split_sentences(&["Hello world. This is great! Is it not?"]);
assert_eq!(out.lines, ["Hello world.", "This is great!", "Is it not?"]);
assert_eq!(out.edits, 2);

let out = strip_comments(&["foo %bar", "%only comment", "baz"], CommentMode::Remove);
assert_eq!(out.lines, ["foo ", "baz"]);
```

Error handling
--------------
Fallible functions return `tutil::Result<T>`; match on `tutil::Error`, e.g.
`Error::BackupExists` when a backup with the same timestamp is already present.

Useful modules
--------------
- [`api`] — per-file and batch orchestration.
- [`core`] — the line transforms.
- [`io`] — prompts, validation, backups and file rewriting.
- [`types`] — `Operation`, `CommentMode`, `ExtensionClass`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use error::{Error, Result};
pub use types::{CommentMode, ExtensionClass, Operation};

// Transforms
pub use core::transform::{Transform, TransformResult, split_sentences, strip_comments};

// I/O
pub use io::{
    Prompt, Rejection, ScriptedPrompt, StdinPrompt, TargetFile, ValidationPolicy, backup,
    backup_at, check_text_file, is_valid_text_file,
};

// High-level API re-exports
pub use api::{
    BatchReport, FileOutcome, RunOptions, SkipReason, ask_comment_mode, run_batch, run_file,
};
