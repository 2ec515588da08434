//! High-level library API: run a transform over one file or a batch of files
//! with the validate → backup → transform → overwrite sequence enforced.
//! Prefer these entry points over calling the `io` and `core` pieces directly.
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::transform::Transform;
use crate::error::{Error, Result};
use crate::io::backup::backup;
use crate::io::prompt::Prompt;
use crate::io::validate::{Rejection, ValidationPolicy, check_text_file};
use crate::io::writer::{overwrite_lines, read_lines};
use crate::types::{CommentMode, ExtensionClass};

/// Per-run switches shared by every file of a batch.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Report absolute paths, backup locations and other detail
    pub verbose: bool,
    /// Accept unexpected extensions without asking and carry on when a backup
    /// cannot be made
    pub force: bool,
    pub policy: ValidationPolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            verbose: true,
            force: false,
            policy: ValidationPolicy::default(),
        }
    }
}

impl RunOptions {
    pub fn new(verbose: bool, force: bool) -> Self {
        Self {
            verbose,
            force,
            policy: ValidationPolicy::default().strict(!force),
        }
    }
}

/// Why a file was left untouched.
#[derive(Debug)]
pub enum SkipReason {
    Invalid(Rejection),
    Backup(Error),
    Failed(Error),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Invalid(r) => write!(
                f,
                "not a valid argument ({}); only existing UTF-8 text files are accepted",
                r
            ),
            SkipReason::Backup(e) => write!(f, "cannot continue without a backup: {}", e),
            SkipReason::Failed(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug)]
pub enum FileOutcome {
    Modified {
        path: PathBuf,
        edits: usize,
        /// Whether the extension was whitelisted or had to be confirmed or forced
        extension: ExtensionClass,
        /// `None` when force mode carried on without a backup
        backup: Option<PathBuf>,
    },
    Skipped {
        path: PathBuf,
        reason: SkipReason,
    },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Modified { path, .. } | FileOutcome::Skipped { path, .. } => path,
        }
    }

    pub fn is_modified(&self) -> bool {
        matches!(self, FileOutcome::Modified { .. })
    }
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub edits: usize,
}

impl BatchReport {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Modified { edits, .. } => {
                self.processed += 1;
                self.edits += edits;
            }
            FileOutcome::Skipped {
                reason: SkipReason::Invalid(_),
                ..
            } => self.skipped += 1,
            FileOutcome::Skipped { .. } => self.errors += 1,
        }
    }
}

/// Validates, backs up, transforms and overwrites a single file.
///
/// Nothing is written unless validation passed and either the backup was made
/// or `options.force` is set.
pub fn run_file(
    transform: &Transform,
    path: &Path,
    options: &RunOptions,
    prompt: &mut dyn Prompt,
) -> FileOutcome {
    let skipped = |reason| FileOutcome::Skipped {
        path: path.to_path_buf(),
        reason,
    };

    info!("Running {} on {}", transform, path.display());
    let target = match check_text_file(path, &options.policy, prompt) {
        Ok(target) => target,
        Err(rejection) => {
            warn!("{} rejected: {}", path.display(), rejection);
            return skipped(SkipReason::Invalid(rejection));
        }
    };
    if target.extension == ExtensionClass::Other {
        debug!("{} accepted despite its extension", target.path.display());
    }
    let path = target.path.as_path();
    if options.verbose {
        if let Ok(absolute) = std::path::absolute(path) {
            info!("Absolute path to the file to be modified: {}", absolute.display());
        }
    }

    let saved = match backup(path) {
        Ok(saved) => Some(saved),
        Err(e) if options.force => {
            warn!("Backup of {} failed, continuing because of force: {}", path.display(), e);
            None
        }
        Err(e) => return skipped(SkipReason::Backup(e)),
    };

    match rewrite(transform, path) {
        Ok(edits) => {
            info!("{} adjustments made to {}", edits, path.display());
            FileOutcome::Modified {
                path: path.to_path_buf(),
                edits,
                extension: target.extension,
                backup: saved,
            }
        }
        Err(e) => skipped(SkipReason::Failed(e)),
    }
}

fn rewrite(transform: &Transform, path: &Path) -> Result<usize> {
    let lines = read_lines(path)?;
    let result = transform.apply(lines.as_slice());
    overwrite_lines(path, result.lines.as_slice())?;
    Ok(result.edits)
}

/// Runs `transform` over `paths` in order. A failing file never stops the batch;
/// `on_outcome` sees each result as soon as it is known.
pub fn run_batch<P: AsRef<Path>>(
    transform: &Transform,
    paths: &[P],
    options: &RunOptions,
    prompt: &mut dyn Prompt,
    mut on_outcome: impl FnMut(&FileOutcome),
) -> BatchReport {
    let mut report = BatchReport::default();
    for path in paths {
        let outcome = run_file(transform, path.as_ref(), options, prompt);
        report.record(&outcome);
        on_outcome(&outcome);
    }
    info!(
        "Batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    report
}

/// Asks once how whole-line comments should be handled.
/// Returns `Error::Aborted` when the operator cancels.
pub fn ask_comment_mode(prompt: &mut dyn Prompt) -> Result<CommentMode> {
    let question = "Comments will be removed. Where a comment takes up a whole line:\n\
                    \x20 l) leave a blank line\n\
                    \x20 r) remove the line (default)\n\
                    \x20 a) abort without changing anything\n\
                    Choice [l/r/a]:";
    let answer = prompt.ask(question)?;
    CommentMode::from_answer(&answer).ok_or(Error::Aborted)
}
