//! Gatekeeping for target files: existence, UTF-8 decodability of the leading
//! bytes, and an operator confirmation for unexpected extensions.
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::io::prompt::{Prompt, is_affirmative};
use crate::types::ExtensionClass;

pub const DEFAULT_SAMPLE_BYTES: usize = 1024;
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "tex"];

/// Knobs for `check_text_file`.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    /// Leading bytes that must decode as UTF-8
    pub sample_bytes: usize,
    /// Extensions (without the dot) accepted without confirmation
    pub extensions: Vec<String>,
    /// Ask before accepting other extensions; when false they are accepted silently
    pub strict: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            sample_bytes: DEFAULT_SAMPLE_BYTES,
            extensions: TEXT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            strict: true,
        }
    }
}

impl ValidationPolicy {
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn classify(&self, path: &Path) -> ExtensionClass {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if self.extensions.iter().any(|w| w == ext) {
            ExtensionClass::Whitelisted
        } else {
            ExtensionClass::Other
        }
    }
}

/// A path that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    pub path: PathBuf,
    pub extension: ExtensionClass,
}

#[derive(Debug, Error)]
pub enum Rejection {
    #[error("not an existing file")]
    Missing,

    #[error("binary or not UTF-8 encoded")]
    NotUtf8,

    #[error("unexpected extension, not confirmed")]
    Declined,

    #[error("cannot be read: {0}")]
    Unreadable(#[from] std::io::Error),
}

/// Validates `path` against `policy`, asking through `prompt` when the
/// extension is not whitelisted and the policy is strict.
pub fn check_text_file(
    path: &Path,
    policy: &ValidationPolicy,
    prompt: &mut dyn Prompt,
) -> Result<TargetFile, Rejection> {
    if !path.is_file() {
        return Err(Rejection::Missing);
    }

    let mut head = Vec::with_capacity(policy.sample_bytes);
    File::open(path)?
        .take(policy.sample_bytes as u64)
        .read_to_end(&mut head)?;
    if !decodes_as_utf8(&head, policy.sample_bytes) {
        return Err(Rejection::NotUtf8);
    }

    let extension = policy.classify(path);
    if extension == ExtensionClass::Other && policy.strict {
        let question = format!(
            "{} does not have a .txt or .tex extension.\n\
             This tool is meant for text files, in particular .tex sources.\n\
             Are you sure you want it modified? [y/N]",
            path.display()
        );
        match prompt.ask(&question) {
            Ok(answer) if is_affirmative(&answer) => {}
            Ok(_) => return Err(Rejection::Declined),
            Err(e) => {
                debug!("Confirmation prompt failed: {}", e);
                return Err(Rejection::Declined);
            }
        }
    }

    Ok(TargetFile {
        path: path.to_path_buf(),
        extension,
    })
}

/// Boolean form of `check_text_file`.
pub fn is_valid_text_file(path: &Path, policy: &ValidationPolicy, prompt: &mut dyn Prompt) -> bool {
    check_text_file(path, policy, prompt).is_ok()
}

/// A multi-byte sequence cut off by the sample limit still counts as valid.
fn decodes_as_utf8(head: &[u8], limit: usize) -> bool {
    match std::str::from_utf8(head) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none() && head.len() == limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::prompt::ScriptedPrompt;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn missing_file_is_rejected_in_any_mode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        for strict in [true, false] {
            let policy = ValidationPolicy::default().strict(strict);
            let mut prompt = ScriptedPrompt::new(["y"]);
            assert!(!is_valid_text_file(&path, &policy, &mut prompt));
            assert!(prompt.asked().is_empty());
        }
    }

    #[test]
    fn directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut prompt = ScriptedPrompt::default();
        let verdict = check_text_file(dir.path(), &ValidationPolicy::default(), &mut prompt);
        assert!(matches!(verdict, Err(Rejection::Missing)));
    }

    #[test]
    fn whitelisted_text_passes_without_prompt() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "paper.tex", b"\\section{Intro} Hello.");
        let mut prompt = ScriptedPrompt::default();
        let target = check_text_file(&path, &ValidationPolicy::default(), &mut prompt).unwrap();
        assert_eq!(target.extension, ExtensionClass::Whitelisted);
        assert!(prompt.asked().is_empty());
    }

    #[test]
    fn binary_content_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "blob.txt", &[0xff, 0xfe, 0x00, 0x81]);
        let mut prompt = ScriptedPrompt::default();
        let verdict = check_text_file(&path, &ValidationPolicy::default(), &mut prompt);
        assert!(matches!(verdict, Err(Rejection::NotUtf8)));
    }

    #[test]
    fn invalid_bytes_after_sample_are_not_inspected() {
        let dir = TempDir::new().unwrap();
        let mut bytes = vec![b'a'; DEFAULT_SAMPLE_BYTES];
        bytes.extend_from_slice(&[0xff, 0xff]);
        let path = write(&dir, "long.txt", &bytes);
        let mut prompt = ScriptedPrompt::default();
        assert!(is_valid_text_file(&path, &ValidationPolicy::default(), &mut prompt));
    }

    #[test]
    fn char_split_by_sample_boundary_is_accepted() {
        let dir = TempDir::new().unwrap();
        let mut bytes = vec![b'a'; DEFAULT_SAMPLE_BYTES - 1];
        bytes.extend_from_slice("é".as_bytes());
        let path = write(&dir, "edge.txt", &bytes);
        let mut prompt = ScriptedPrompt::default();
        assert!(is_valid_text_file(&path, &ValidationPolicy::default(), &mut prompt));
    }

    #[test]
    fn truncated_char_at_end_of_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "cut.txt", &[b'a', 0xc3]);
        let mut prompt = ScriptedPrompt::default();
        assert!(!is_valid_text_file(&path, &ValidationPolicy::default(), &mut prompt));
    }

    #[test]
    fn strict_mode_asks_for_other_extensions() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "notes.md", b"# Notes");

        let mut yes = ScriptedPrompt::new(["Y\n"]);
        let target = check_text_file(&path, &ValidationPolicy::default(), &mut yes).unwrap();
        assert_eq!(target.extension, ExtensionClass::Other);
        assert_eq!(yes.asked().len(), 1);

        let mut no = ScriptedPrompt::new(["yes"]);
        let verdict = check_text_file(&path, &ValidationPolicy::default(), &mut no);
        assert!(matches!(verdict, Err(Rejection::Declined)));
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "SHOUT.TEX", b"Loud. Text.");
        let mut prompt = ScriptedPrompt::new(["n"]);
        let verdict = check_text_file(&path, &ValidationPolicy::default(), &mut prompt);
        assert!(matches!(verdict, Err(Rejection::Declined)));
        assert_eq!(prompt.asked().len(), 1);
    }

    #[test]
    fn lenient_mode_accepts_other_extensions_silently() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "README", b"plain text");
        let mut prompt = ScriptedPrompt::default();
        let policy = ValidationPolicy::default().strict(false);
        assert!(is_valid_text_file(&path, &policy, &mut prompt));
        assert!(prompt.asked().is_empty());
    }

    #[test]
    fn validation_does_not_touch_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "keep.txt", b"Same. Bytes.");
        let mut prompt = ScriptedPrompt::default();
        assert!(is_valid_text_file(&path, &ValidationPolicy::default(), &mut prompt));
        assert_eq!(std::fs::read(&path).unwrap(), b"Same. Bytes.");
    }
}
