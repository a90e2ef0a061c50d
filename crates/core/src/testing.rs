// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test payloads and a recording logger for registry tests

use crate::events::{Arg, Kind};
use crate::logger::{error_chain, Logger};
use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// Kinds with a small hierarchy: `Any` takes everything, `Shape` takes
/// circles and squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Any,
    Shape,
    Circle,
    Square,
    Text,
}

impl Kind for TokenKind {
    fn accepts(self, actual: Self) -> bool {
        match self {
            TokenKind::Any => true,
            TokenKind::Shape => matches!(
                actual,
                TokenKind::Shape | TokenKind::Circle | TokenKind::Square
            ),
            declared => declared == actual,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Circle(f64),
    Square(f64),
    Text(String),
}

impl Arg for Token {
    type Kind = TokenKind;

    fn kind(&self) -> TokenKind {
        match self {
            Token::Circle(_) => TokenKind::Circle,
            Token::Square(_) => TokenKind::Square,
            Token::Text(_) => TokenKind::Text,
        }
    }
}

/// Shared list of call records
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Logger that keeps every line in memory
#[derive(Clone, Default)]
pub struct Recorder {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }
}

impl Logger for Recorder {
    fn log(&self, message: fmt::Arguments<'_>) {
        self.lines.borrow_mut().push(message.to_string());
    }

    fn log_error(&self, error: &(dyn Error + 'static)) {
        let mut lines = self.lines.borrow_mut();
        for cause in error_chain(error) {
            lines.push(format!("caused by: {}", cause));
        }
    }
}
