//! Error handling for speakeasy-helpers.
//!
//! Domain failures are modelled by [`HelperError`] and travel through the
//! command layer as [`anyhow::Error`], picking up file context on the way.
//! At the top of the process, [`user_friendly_error`] turns whatever arrived
//! into an [`ErrorContext`] carrying details and an actionable suggestion.
//!
//! # Error Categories
//!
//! - [`HelperError::InvalidArgument`] - the caller supplied no operation IDs
//! - [`HelperError::ParseError`] - a document exists but is not valid YAML of
//!   the expected shape
//! - [`HelperError::IoError`] - reading, creating a directory, or writing failed
//! - [`HelperError::SerializeError`] - an edited document could not be turned
//!   back into YAML
//!
//! A missing document is deliberately absent from this list: it is reported as
//! [`PruneOutcome::Missing`](crate::core::PruneOutcome::Missing) and the
//! command carries on.

use colored::Colorize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// The main error type for speakeasy-helpers operations.
///
/// # Examples
///
/// ```rust,no_run
/// use speakeasy_helpers::core::HelperError;
///
/// let error = HelperError::ParseError {
///     file: ".speakeasy/gen.lock".to_string(),
///     reason: "did not find expected key".to_string(),
/// };
/// assert!(error.to_string().contains("gen.lock"));
/// ```
#[derive(Error, Debug)]
pub enum HelperError {
    /// The command was invoked with unusable arguments.
    #[error("{message}")]
    InvalidArgument {
        /// Description of what was wrong with the arguments
        message: String,
    },

    /// A document exists but could not be parsed into the expected structure.
    ///
    /// # Fields
    /// - `file`: The path of the document that failed to parse
    /// - `reason`: The underlying parser message or the shape violation
    #[error("Failed to parse {file}: {reason}")]
    ParseError {
        /// Path of the offending document
        file: String,
        /// Parser message or description of the structural problem
        reason: String,
    },

    /// An edited document could not be serialized back to YAML.
    ///
    /// Raised before anything is written, so the file on disk is untouched.
    #[error("Failed to serialize {file}: {reason}")]
    SerializeError {
        /// Path the document would have been written to
        file: String,
        /// Serializer message
        reason: String,
    },

    /// A file system operation failed.
    #[error("Failed {operation} {path}: {source}")]
    IoError {
        /// What was being attempted ("reading", "writing", "creating directory")
        operation: String,
        /// The path being operated on
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl HelperError {
    /// Build an [`HelperError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Build an [`HelperError::ParseError`] for `file`.
    pub fn parse(file: &Path, reason: impl fmt::Display) -> Self {
        Self::ParseError {
            file: file.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build an [`HelperError::SerializeError`] for `file`.
    pub fn serialize(file: &Path, reason: impl fmt::Display) -> Self {
        Self::SerializeError {
            file: file.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build an [`HelperError::IoError`] for `operation` on `path`.
    pub fn io(operation: impl Into<String>, path: &Path, source: std::io::Error) -> Self {
        Self::IoError {
            operation: operation.into(),
            path: path.display().to_string(),
            source,
        }
    }
}

impl Clone for HelperError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidArgument {
                message,
            } => Self::InvalidArgument {
                message: message.clone(),
            },
            Self::ParseError {
                file,
                reason,
            } => Self::ParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::SerializeError {
                file,
                reason,
            } => Self::SerializeError {
                file: file.clone(),
                reason: reason.clone(),
            },
            // io::Error is not Clone; keep the kind and message
            Self::IoError {
                operation,
                path,
                source,
            } => Self::IoError {
                operation: operation.clone(),
                path: path.clone(),
                source: std::io::Error::new(source.kind(), source.to_string()),
            },
        }
    }
}

/// Error wrapper carrying user-facing guidance.
///
/// `context` holds the outer message chain added while the error propagated
/// (for example "failed to process gen.lock"), `details` explains what the
/// error means and `suggestion` says what to do about it.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: HelperError,
    /// What the command was doing when the error surfaced
    pub context: Option<String>,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no guidance attached.
    #[must_use]
    pub const fn new(error: HelperError) -> Self {
        Self {
            error,
            context: None,
            suggestion: None,
            details: None,
        }
    }

    /// Record what the command was doing when the error surfaced.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow,
    /// suggestion in green.
    pub fn display(&self) {
        match &self.context {
            Some(context) => eprintln!("{}: {}: {}", "error".red().bold(), context, self.error),
            None => eprintln!("{}: {}", "error".red().bold(), self.error),
        }

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "{context}: ")?;
        }
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the terminal.
///
/// [`HelperError`]s found anywhere in the chain get tailored guidance. Bare
/// I/O errors are mapped onto [`HelperError::IoError`]; anything else is shown
/// as an invalid-argument style message with its full chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(helper_error) = error.downcast_ref::<HelperError>() {
        let ctx = create_error_context(helper_error.clone());
        return match outer_context(&error, helper_error) {
            Some(context) => ctx.with_context(context),
            None => ctx,
        };
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        return create_error_context(HelperError::IoError {
            operation: "accessing".to_string(),
            path: "unknown".to_string(),
            source: std::io::Error::new(io_error.kind(), io_error.to_string()),
        });
    }

    ErrorContext::new(HelperError::invalid_argument(format!("{error:#}")))
}

/// The messages layered on top of `inner`, joined the way anyhow's alternate
/// formatter joins them.
fn outer_context(error: &anyhow::Error, inner: &HelperError) -> Option<String> {
    let inner_message = inner.to_string();
    let layers: Vec<String> = error
        .chain()
        .map(ToString::to_string)
        .take_while(|message| *message != inner_message)
        .collect();

    if layers.is_empty() {
        None
    } else {
        Some(layers.join(": "))
    }
}

fn create_error_context(error: HelperError) -> ErrorContext {
    match &error {
        HelperError::InvalidArgument {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass the operation to reset with '--operation-id <ID>' (repeat the flag for several operations)"),

        HelperError::ParseError {
            file,
            ..
        } => {
            let suggestion = format!(
                "Fix the YAML syntax in {file}, or restore it from version control and re-run 'speakeasy run'"
            );
            ErrorContext::new(error)
                .with_details("The file exists but is not valid YAML of the expected shape; it was left unchanged")
                .with_suggestion(suggestion)
        }

        HelperError::SerializeError {
            file,
            ..
        } => {
            let details = format!("{file} was not modified");
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Re-run with --verbose and report the output as a bug")
        }

        HelperError::IoError {
            source,
            ..
        } => {
            let suggestion = match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check the ownership and permissions of the .speakeasy directory"
                }
                _ => "Check that the .speakeasy directory is writable and the disk is not full",
            };
            ErrorContext::new(error)
                .with_details("Files processed before this error have already been rewritten")
                .with_suggestion(suggestion)
        }
    }
}
