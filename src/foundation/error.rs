use std::path::PathBuf;

/// Convenience result type used across sweepstrip.
pub type StripResult<T> = Result<T, StripError>;

/// Top-level error taxonomy used by the pipeline and raster backends.
#[derive(thiserror::Error, Debug)]
pub enum StripError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// An external raster tool could not be launched.
    #[error("tool not found: '{tool}' (is it installed and on PATH?)")]
    ToolNotFound {
        /// Binary name that failed to spawn.
        tool: String,
    },

    /// An external raster tool exited unsuccessfully.
    #[error("tool '{tool}' failed with {}: {stderr}", exit_label(.code))]
    ToolExecutionFailed {
        /// Binary name that was invoked.
        tool: String,
        /// Exit code, `None` when the process was terminated by a signal.
        code: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// A source image was missing during the pre-flight check.
    #[error("source image missing: '{}'", .0.display())]
    SourceImageMissing(PathBuf),

    /// Errors when deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StripError {
    /// Build a [`StripError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StripError::ToolNotFound`] value.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Build a [`StripError::ToolExecutionFailed`] value.
    pub fn tool_failed(
        tool: impl Into<String>,
        code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::ToolExecutionFailed {
            tool: tool.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Build a [`StripError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
