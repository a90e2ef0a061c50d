// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger writing plain lines to a stream

use rb_core::{error_chain, Logger};
use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};

/// Writes each message as one line, and errors as a header line followed
/// by one indented `caused by:` line per source.
///
/// Write failures are ignored: diagnostics must never break a turn.
pub struct WriterLogger<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> WriterLogger<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl WriterLogger<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Logger for WriterLogger<W> {
    fn log(&self, message: fmt::Arguments<'_>) {
        let mut out = self.out.borrow_mut();
        let _ = writeln!(out, "{}", message);
    }

    fn log_error(&self, error: &(dyn Error + 'static)) {
        let mut out = self.out.borrow_mut();
        let mut chain = error_chain(error).into_iter();
        if let Some(head) = chain.next() {
            let _ = writeln!(out, "{}", head);
        }
        for cause in chain {
            let _ = writeln!(out, "    caused by: {}", cause);
        }
        let _ = out.flush();
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
