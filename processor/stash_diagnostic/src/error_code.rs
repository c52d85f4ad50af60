use std::fmt;

/// Error codes for all processor diagnostics.
///
/// Format: E#### where the second digit indicates the stage:
/// - E03xx: member validation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Field modifiers outside the accepted set
    E0301,
}

impl ErrorCode {
    /// The code as it appears in rendered output.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0301 => "E0301",
        }
    }

    /// One-line description of the error class.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E0301 => "field modifiers outside the accepted set",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_renders_as_its_name() {
        assert_eq!(ErrorCode::E0301.to_string(), "E0301");
        assert_eq!(
            ErrorCode::E0301.description(),
            "field modifiers outside the accepted set"
        );
    }
}
