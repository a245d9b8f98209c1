use miette::Diagnostic;
use thiserror::Error;

/// Main error type for wsz operations.
#[derive(Error, Diagnostic, Debug)]
pub enum SkinError {
    #[error("IO error: {0}")]
    #[diagnostic(code(wsz::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(wsz::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// A requested skin archive does not exist.
    #[error("Skin not found: {path}")]
    #[diagnostic(code(wsz::not_found))]
    FileNotFound { path: std::path::PathBuf },

    /// Archive-level failure: unreadable container or an entry whose
    /// resolved path escapes the archive root. Fatal, aborts the load.
    #[error("Invalid archive: {message}")]
    #[diagnostic(code(wsz::archive))]
    InvalidArchive {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// The main window background sprite is unresolved after all fallback.
    /// The only fatal condition inside the composition pipeline.
    #[error("Missing required file: {name}")]
    #[diagnostic(code(wsz::missing_required))]
    MissingRequiredFile {
        name: String,
        #[help]
        help: Option<String>,
    },

    /// Decode, crop or pixel-read failure. Always scoped to the sheet or
    /// operation that raised it, never propagated past it.
    #[error("Invalid bitmap: {message}")]
    #[diagnostic(code(wsz::bitmap))]
    InvalidBitmap { message: String },

    /// Config text could not be parsed. Never fatal; callers substitute
    /// the documented defaults.
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(wsz::config))]
    InvalidConfiguration { message: String },
}

pub type Result<T> = std::result::Result<T, SkinError>;
