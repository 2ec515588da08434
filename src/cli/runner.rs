use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tutil::{
    BatchReport, Error, FileOutcome, Operation, Prompt, RunOptions, StdinPrompt, Transform,
    ask_comment_mode, run_batch,
};

use super::args::{ArgParser, Invocation};
use super::errors::AppError;

/// Environment variable holding a `tracing` filter that overrides the flags.
pub const LOG_ENV: &str = "TUTIL_LOG";

fn init_logging(invocation: &Invocation) {
    let level = if invocation.debug_log() {
        "debug"
    } else if invocation.verbose() {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn program_name(argv: &[String]) -> String {
    argv.first()
        .and_then(|p| Path::new(p).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tutil".to_string())
}

pub fn usage(program: &str) -> String {
    let mut text = format!(
        "Usage: {program} <operation> [options] [file...]\n\
         \n\
         Edits text and LaTeX files in place. Before a file is changed a copy is\n\
         saved as tutil-log/<name>-<YYYY-MM-DD_HH-MM-SS>.<ext> next to it.\n\
         \n\
         Operations:\n"
    );
    for op in Operation::all() {
        text.push_str(&format!("  {:<12} {}\n", op.name(), describe(*op)));
    }
    text.push_str(&format!(
        "\n\
         Options:\n\
         \x20 -nv          only report outcomes, no detail\n\
         \x20 -f           do not ask about unexpected extensions and modify files\n\
         \x20              even when no backup could be made\n\
         \x20 --log        print debug diagnostics\n\
         \x20 -h, --help   print this help\n\
         \n\
         Set {LOG_ENV} (e.g. {LOG_ENV}=debug) to override the diagnostic level.\n"
    ));
    text
}

fn describe(op: Operation) -> &'static str {
    match op {
        Operation::Separator => "put every sentence on its own line",
        Operation::Uncommenter => "strip % comments (\\% is kept)",
        Operation::Lister => "list available operations",
        Operation::Help => "print this help",
    }
}

fn print_operations() {
    println!("List of available operations:\n");
    for op in Operation::all() {
        println!("{}", op.name());
    }
}

fn report_outcome(transform: &Transform, outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Modified {
            path,
            edits,
            backup,
            ..
        } => {
            println!(
                "Success! {} has been modified by {}. Adjustments made: {}",
                path.display(),
                transform,
                edits
            );
            if backup.is_none() {
                warn!("{} was modified without a backup", path.display());
            }
        }
        FileOutcome::Skipped { path, reason } => {
            eprintln!("Skipped {}: {}", path.display(), reason);
        }
    }
}

fn run_transform(
    transform: Transform,
    invocation: &Invocation,
    prompt: &mut dyn Prompt,
) -> BatchReport {
    let options = RunOptions::new(invocation.verbose(), invocation.force());
    let report = run_batch(&transform, invocation.files.as_slice(), &options, prompt, |outcome| {
        report_outcome(&transform, outcome)
    });
    if invocation.files.len() > 1 {
        println!(
            "Done: {} modified, {} skipped, {} failed.",
            report.processed, report.skipped, report.errors
        );
    }
    report
}

/// Runs the command line in `argv` (program path first).
pub fn run(argv: Vec<String>) -> Result<(), AppError> {
    let invocation = ArgParser::new(program_name(&argv)).parse(&argv)?;
    init_logging(&invocation);
    for warning in &invocation.warnings {
        warn!("{}", warning);
    }

    let operation = invocation.operation;
    if operation.modifies_files() && invocation.files.is_empty() {
        println!(
            "No files given. Usage: {} {} [options] <file>...",
            invocation.program, operation
        );
        return Ok(());
    }

    let mut prompt = StdinPrompt;
    match operation {
        Operation::Help => print!("{}", usage(&invocation.program)),
        Operation::Lister => print_operations(),
        Operation::Separator => {
            run_transform(Transform::Separator, &invocation, &mut prompt);
        }
        Operation::Uncommenter => match ask_comment_mode(&mut prompt) {
            Ok(mode) => {
                info!("Comment-only lines: {}", mode);
                run_transform(Transform::Uncommenter(mode), &invocation, &mut prompt);
            }
            Err(Error::Aborted) => println!("{}", Error::Aborted),
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}
