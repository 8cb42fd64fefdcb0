//! Errors raised while building schemas or loading manifests and documents.

use stencil_core::SchemaResolutionError;
use thiserror::Error;

/// Error from the schema collaborator.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A component declaration was rejected before compilation.
    #[error(transparent)]
    Resolution(#[from] SchemaResolutionError),

    /// The compiled validator could not be built from a descriptor.
    #[error("validator build error for '{descriptor}': {reason}")]
    Build {
        /// Display form of the descriptor being compiled.
        descriptor: String,
        /// Reason reported by the validation library.
        reason: String,
    },

    /// A component manifest could not be parsed.
    #[error("manifest load error for '{path}': {reason}")]
    ManifestLoad {
        /// Path (or `<inline>`) of the manifest.
        path: String,
        /// Reason the manifest was rejected.
        reason: String,
    },

    /// A document file could not be loaded or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// IO error reading a manifest or document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
