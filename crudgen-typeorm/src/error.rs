use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Pre-flight validation, reported before anything is written.
    #[error("table name must be specified")]
    #[diagnostic(help("usage: crudgen crud <table-name> --strings <a,b> --numbers <c,d>"))]
    MissingTableName,

    /// Pre-flight validation, reported before anything is written.
    #[error("columns must be specified, strings / numbers")]
    #[diagnostic(help("pass at least one of --strings / --numbers as a comma-separated column list"))]
    MissingColumns,

    #[error("template '{name}' is not registered")]
    TemplateNotFound { name: String },

    #[error("template '{name}' is malformed")]
    Template {
        name: String,
        #[source]
        source: handlebars::TemplateError,
    },

    #[error("failed to render template '{name}'")]
    Render {
        name: String,
        #[source]
        source: handlebars::RenderError,
    },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(help("check permissions and free space on the target directory"))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Process exit code for this failure kind.
    ///
    /// Validation and render/write failures get distinct codes so CI scripts
    /// can tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingTableName => 2,
            Error::MissingColumns => 3,
            Error::TemplateNotFound { .. } | Error::Template { .. } | Error::Render { .. } => 4,
            Error::Write { .. } => 5,
        }
    }
}
