// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic side channel owned by the facade
//!
//! The registry never prints on its own. Registration lines and dispatch
//! failures are handed to whatever `Logger` the owner injects.

use std::error::Error;
use std::fmt;

/// Logging capability injected into an `EventRegistry`
pub trait Logger {
    /// Log a formatted message line
    fn log(&self, message: fmt::Arguments<'_>);

    /// Log an error together with its cause chain
    fn log_error(&self, error: &(dyn Error + 'static));
}

/// Render an error and every `source()` below it, outermost first
pub fn error_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut chain = vec![error.to_string()];
    let mut current = error.source();
    while let Some(cause) = current {
        chain.push(cause.to_string());
        current = cause.source();
    }
    chain
}
