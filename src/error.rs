//! Error types for test generation.

use thiserror::Error;

use crate::literal::RenderError;
use crate::naming::NamingError;

/// Every failure is fatal to the run; nothing is written when one occurs.
#[derive(Debug, Error)]
pub enum GenError {
    /// Missing or unusable CLI argument
    #[error("{0}")]
    Usage(String),

    /// Malformed input document
    #[error("failed to parse schema document: {0}")]
    Parse(String),

    /// Field name that cannot become a Java accessor, builder method or variable
    #[error("invalid field name at {path}")]
    Naming {
        path: String,
        #[source]
        source: NamingError,
    },

    /// Value without a Java literal form
    #[error("cannot render value at {path} as a Java literal")]
    Render {
        path: String,
        #[source]
        source: RenderError,
    },

    /// Failed to write output file
    #[error("failed to write output file '{path}'")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub fn naming(path: &str, source: NamingError) -> Self {
        Self::Naming { path: path.to_string(), source }
    }

    pub fn render(path: &str, source: RenderError) -> Self {
        Self::Render { path: path.to_string(), source }
    }
}
