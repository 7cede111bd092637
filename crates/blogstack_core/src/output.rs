//! Exported deployment-time outputs.

use blogstack_model::ExportName;
use serde::Serialize;
use std::fmt;

/// A named, exported output of the stack, consumable by other stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    /// Export name, `{stack}-{Name}`.
    pub export: ExportName,
    /// Exported value.
    pub value: String,
    /// Human-readable description.
    pub description: String,
}

impl Output {
    /// Creates an output record.
    #[must_use]
    pub fn new(export: ExportName, value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            export,
            value: value.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.export, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogstack_model::StackName;

    #[test]
    fn output_display() {
        let stack = StackName::new("BlogBackendStack").unwrap();
        let output = Output::new(
            ExportName::new(&stack, "HttpApiUrl"),
            "https://blogbackendstack.example.invalid",
            "HTTP API URL",
        );
        assert_eq!(
            format!("{output}"),
            "BlogBackendStack-HttpApiUrl = https://blogbackendstack.example.invalid"
        );
    }
}
