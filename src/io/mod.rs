//! I/O layer: operator prompts, target-file validation, timestamped backups
//! and line-oriented reading/atomic overwriting of text files.
pub mod prompt;
pub use prompt::{Prompt, ScriptedPrompt, StdinPrompt};

pub mod validate;
pub use validate::{Rejection, TargetFile, ValidationPolicy, check_text_file, is_valid_text_file};

pub mod backup;
pub use backup::{backup, backup_at};

pub mod writer;
pub use writer::{overwrite_lines, read_lines};
