use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(
        "You need to specify the name of an operation, e.g. \"{program} separator\". For the list of operations type \"{program} lister\"."
    )]
    MissingOperation { program: String },

    #[error(
        "{name} is not a valid operation.\nType \"{program} lister\" to see the available operations or \"{program} --help\" for help."
    )]
    UnknownOperation { name: String, program: String },

    #[error(transparent)]
    Tutil(#[from] tutil::Error),
}
