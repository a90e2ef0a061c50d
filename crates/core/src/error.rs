// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for handler bodies and dispatch

use thiserror::Error;

/// Result returned by every handler body
pub type HandlerResult = Result<(), HandlerError>;

/// Failure raised by a handler body
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Wrap any error, keeping it as the source of the chain
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(error))
    }
}

/// Why a single subscription could not be delivered.
///
/// The registry isolates these per subscription: they are logged and
/// dispatch moves on to the next subscriber.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("handler failed: {0}")]
    Handler(#[source] HandlerError),
    #[error("handler panicked: {0}")]
    Panicked(String),
}

impl InvokeError {
    /// Short label for the failure kind, used in dispatch diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            InvokeError::Handler(_) => "HandlerError",
            InvokeError::Panicked(_) => "Panic",
        }
    }

    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        InvokeError::Panicked(message)
    }
}
