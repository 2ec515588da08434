use std::collections::BTreeSet;
use std::path::PathBuf;

use tutil::Operation;

use super::errors::AppError;

/// Raw tokens split into flags and operands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub optional: Vec<String>,
    pub positional: Vec<String>,
}

/// Strategy for telling flags from operands. `args` never includes the
/// program name.
pub trait ArgClassifier {
    fn classify(&self, args: &[String]) -> Classified;
}

/// Tokens starting with `prefix` are flags, everything else is an operand.
#[derive(Debug, Clone, Copy)]
pub struct PrefixClassifier {
    pub prefix: char,
}

impl Default for PrefixClassifier {
    fn default() -> Self {
        Self { prefix: '-' }
    }
}

impl ArgClassifier for PrefixClassifier {
    fn classify(&self, args: &[String]) -> Classified {
        let (optional, positional) = args
            .iter()
            .cloned()
            .partition(|arg| arg.starts_with(self.prefix));
        Classified {
            optional,
            positional,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Flag {
    /// `-nv`: only report outcomes, no detail
    NoVerbose,
    /// `-f`: skip extension confirmation and carry on without a backup
    Force,
    /// `-h`, `--help`
    Help,
    /// `--log`: debug diagnostics
    Log,
}

impl Flag {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "-nv" | "--no-verbose" => Some(Flag::NoVerbose),
            "-f" | "--force" => Some(Flag::Force),
            "-h" | "--help" => Some(Flag::Help),
            "--log" => Some(Flag::Log),
            _ => None,
        }
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub operation: Operation,
    pub files: Vec<PathBuf>,
    pub flags: BTreeSet<Flag>,
    /// Non-fatal remarks about the input, reported once logging is up
    pub warnings: Vec<String>,
}

impl Invocation {
    pub fn verbose(&self) -> bool {
        !self.flags.contains(&Flag::NoVerbose)
    }

    pub fn force(&self) -> bool {
        self.flags.contains(&Flag::Force)
    }

    pub fn debug_log(&self) -> bool {
        self.flags.contains(&Flag::Log)
    }
}

/// Turns the process argument vector into an `Invocation`.
pub struct ArgParser<C = PrefixClassifier> {
    program: String,
    classifier: C,
}

impl ArgParser {
    /// `program` is the name shown in guidance messages.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_classifier(program, PrefixClassifier::default())
    }
}

impl<C: ArgClassifier> ArgParser<C> {
    pub fn with_classifier(program: impl Into<String>, classifier: C) -> Self {
        Self {
            program: program.into(),
            classifier,
        }
    }

    /// Parses `argv`, whose first element is the program path.
    ///
    /// The first operand names the operation and the rest are target files.
    /// With `-h`/`--help` anywhere the operation is always `Help`.
    pub fn parse(&self, argv: &[String]) -> Result<Invocation, AppError> {
        let args = argv.get(1..).unwrap_or_default();
        let Classified {
            optional,
            positional,
        } = self.classifier.classify(args);

        let mut warnings = Vec::new();
        let mut flags = BTreeSet::new();
        for token in &optional {
            match Flag::from_token(token) {
                Some(flag) => {
                    flags.insert(flag);
                }
                None => warnings.push(format!("Ignoring unrecognised option {token}")),
            }
        }
        for token in &positional {
            if !token.chars().next().is_some_and(char::is_alphabetic) {
                warnings.push(format!(
                    "Unusual argument {token}: positional arguments should start with a letter. Continuing..."
                ));
            }
        }

        let mut operands = positional.into_iter();
        let operation = if flags.contains(&Flag::Help) {
            operands.next();
            Operation::Help
        } else {
            let name = operands.next().ok_or_else(|| AppError::MissingOperation {
                program: self.program.clone(),
            })?;
            Operation::from_name(&name).ok_or_else(|| AppError::UnknownOperation {
                name,
                program: self.program.clone(),
            })?
        };

        Ok(Invocation {
            program: self.program.clone(),
            operation,
            files: operands.map(PathBuf::from).collect(),
            flags,
            warnings,
        })
    }
}
