//! One sentence per line.
use once_cell::sync::Lazy;
use regex::Regex;

use super::TransformResult;

/// Sentence terminator, a whitespace run, then an uppercase letter.
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.!?])\s+([A-Z])").expect("sentence break pattern is valid")
});

/// Puts every sentence on its own line.
///
/// Blank lines and lines containing `%` anywhere are passed through untouched.
/// Every other line has its trailing whitespace trimmed, and each
/// `terminator + whitespace + uppercase` match has its whitespace replaced by a
/// line break. One edit is counted per break. Abbreviations, math mode and
/// similar context are not recognised.
pub fn split_sentences<S: AsRef<str>>(lines: &[S]) -> TransformResult {
    let mut result = TransformResult::default();

    for line in lines {
        let line = line.as_ref();
        if line.contains('%') || line.trim().is_empty() {
            result.lines.push(line.to_string());
            continue;
        }

        let line = line.trim_end();
        let mut start = 0;
        for caps in SENTENCE_BREAK.captures_iter(line) {
            // Group 1 is a single ASCII byte; the new line starts at group 2.
            let (Some(terminator), Some(capital)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            result.lines.push(line[start..terminator.end()].to_string());
            start = capital.start();
            result.edits += 1;
        }
        result.lines.push(line[start..].to_string());
    }

    result
}
