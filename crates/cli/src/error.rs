// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use rb_bot::{ConfigError, TraceError};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct RbError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Underlying error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RbError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The trace could not be read or a line failed to parse
    pub fn trace(path: &Path, error: TraceError) -> Self {
        match error {
            TraceError::Read { source, .. } => {
                RbError::new(format!("Cannot read trace '{}'", path.display()))
                    .with_context(source.to_string())
                    .with_suggestion("Check the path passed to `rb replay`")
                    .with_source(source)
            }
            TraceError::Malformed { line, source } => RbError::new(format!(
                "Malformed trace '{}' at line {}",
                path.display(),
                line
            ))
            .with_context(source.to_string())
            .with_suggestion("Each line must be one JSON object with a \"type\" field")
            .with_suggestion("List the accepted event names with: rb events")
            .with_source(source),
        }
    }

    /// The configuration file was unreadable or rejected
    pub fn config(path: &Path, error: ConfigError) -> Self {
        let err = RbError::new(format!("Invalid config '{}'", path.display()))
            .with_context(error.to_string());
        match error {
            ConfigError::Read { .. } => err.with_suggestion("Check the path passed to --config"),
            ConfigError::Parse(_) => err.with_suggestion(
                "Known sections are [registry], [tracker] and [firing]; unknown keys are rejected",
            ),
            ConfigError::Invalid(_) => {
                err.with_suggestion("Thresholds must lie in [0, 1] and decrease from max to min")
            }
        }
    }
}

impl fmt::Display for RbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for RbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
