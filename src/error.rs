use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asset generation
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(flavor_assets::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(flavor_assets::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(flavor_assets::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Resource error in {path}: {message}")]
    #[diagnostic(code(flavor_assets::resource))]
    Resource {
        path: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Verification failed: {message}")]
    #[diagnostic(code(flavor_assets::verify))]
    Verify {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl AssetError {
    /// Wrap an I/O failure with the path it happened on.
    pub fn io(
        path: impl Into<std::path::PathBuf>,
        action: &str,
        err: impl std::fmt::Display,
    ) -> Self {
        AssetError::Io {
            path: path.into(),
            message: format!("{}: {}", action, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
