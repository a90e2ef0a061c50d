// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger that forwards the registry's diagnostics into `tracing`

use rb_core::{error_chain, Logger};
use std::error::Error;
use std::fmt;

/// Forwards messages as `info` events and error chains as `error` events,
/// all under the `rb::registry` target.
#[derive(Clone, Debug, Default)]
pub struct TracingLogger {
    bot: Option<String>,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every event with the owning bot's name
    pub fn for_bot(name: impl Into<String>) -> Self {
        Self {
            bot: Some(name.into()),
        }
    }
}

impl Logger for TracingLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        match &self.bot {
            Some(bot) => tracing::info!(target: "rb::registry", bot = %bot, "{}", message),
            None => tracing::info!(target: "rb::registry", "{}", message),
        }
    }

    fn log_error(&self, error: &(dyn Error + 'static)) {
        let chain = error_chain(error);
        let causes = chain.get(1..).unwrap_or_default();
        match &self.bot {
            Some(bot) => tracing::error!(
                target: "rb::registry",
                bot = %bot,
                error = %error,
                causes = ?causes,
                "handler failure"
            ),
            None => tracing::error!(
                target: "rb::registry",
                error = %error,
                causes = ?causes,
                "handler failure"
            ),
        }
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
