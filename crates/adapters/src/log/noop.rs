// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger that discards everything

use rb_core::Logger;
use std::error::Error;
use std::fmt;

/// Logger that drops every line.
///
/// Used for bots that run silently, e.g. benchmarks or quiet replays.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn log(&self, _message: fmt::Arguments<'_>) {}

    fn log_error(&self, _error: &(dyn Error + 'static)) {}
}
