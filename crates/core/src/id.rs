// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ID generation abstractions

use std::cell::Cell;
use std::rc::Rc;

/// Generates unique identifiers within one session
pub trait IdGen: Clone {
    fn next(&self) -> String;
}

/// Sequential ID generator: `<prefix>-1`, `<prefix>-2`, ...
///
/// Clones share the counter, so every clone handed out for one session
/// continues the same sequence.
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Rc<Cell<u64>>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Rc::new(Cell::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.counter.get();
        self.counter.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}
