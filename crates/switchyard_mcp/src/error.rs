//! Error types for the MCP layer.

use derive_more::{Display, From};
use switchyard_error::{SwitchyardError, SwitchyardErrorKind};

/// Failure of a tool call.
#[derive(Debug, Display, From)]
pub enum McpError {
    /// Arguments did not match the tool's schema.
    #[display("Invalid input: {}", _0)]
    #[from(skip)]
    InvalidInput(String),

    /// No tool is registered under the requested name.
    #[display("Tool not found: {}", _0)]
    #[from(skip)]
    ToolNotFound(String),

    /// The tool ran and failed.
    #[display("Tool execution failed: {}", _0)]
    #[from(skip)]
    ToolExecutionFailed(String),

    /// Failure reported by an adapter.
    #[display("{}", _0)]
    Adapter(SwitchyardError),
}

impl std::error::Error for McpError {}

impl McpError {
    /// Recategorizes adapter input errors as invalid tool input.
    pub fn from_adapter(err: SwitchyardError) -> Self {
        match err.kind() {
            SwitchyardErrorKind::Input(input) => Self::InvalidInput(input.message.clone()),
            _ => Self::Adapter(err),
        }
    }

    /// True when the caller sent bad arguments.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use switchyard_error::{AuthError, InputError};

    #[test]
    fn test_input_errors_become_invalid_input() {
        let err = McpError::from_adapter(InputError::missing("artist").into());
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid input: Missing 'artist'");
    }

    #[test]
    fn test_other_errors_stay_adapter_errors() {
        let err = McpError::from_adapter(AuthError::session_key_required().into());
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("session key required"));
    }
}
