// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake logger for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use rb_core::{error_chain, Logger};
use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// Recorded log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    Message(String),
    /// Error display followed by each source
    Error(Vec<String>),
}

/// Fake logger that keeps every entry in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// registry and inspect another.
#[derive(Clone, Default)]
pub struct FakeLogger {
    lines: Rc<RefCell<Vec<LogLine>>>,
}

impl FakeLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded entries
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.borrow().clone()
    }

    /// Plain messages only
    pub fn messages(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| match line {
                LogLine::Message(m) => Some(m.clone()),
                LogLine::Error(_) => None,
            })
            .collect()
    }

    /// Error chains only
    pub fn errors(&self) -> Vec<Vec<String>> {
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| match line {
                LogLine::Error(chain) => Some(chain.clone()),
                LogLine::Message(_) => None,
            })
            .collect()
    }

    /// True if any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Logger for FakeLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        self.lines
            .borrow_mut()
            .push(LogLine::Message(message.to_string()));
    }

    fn log_error(&self, error: &(dyn Error + 'static)) {
        self.lines
            .borrow_mut()
            .push(LogLine::Error(error_chain(error)));
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
