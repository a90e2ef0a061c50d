// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-event subscriber sets

use super::kind::Arg;
use super::subscription::Subscription;

/// Insertion-ordered, duplicate-free subscriptions for one event name
pub struct Mapping<A: Arg> {
    subscriptions: Vec<Subscription<A>>,
}

impl<A: Arg> Mapping<A> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Append a subscription unless the same listener/handler pair is
    /// already present. Returns whether it was inserted.
    pub fn add(&mut self, subscription: Subscription<A>) -> bool {
        if self.subscriptions.contains(&subscription) {
            return false;
        }
        self.subscriptions.push(subscription);
        true
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subscription<A>> {
        self.subscriptions.iter()
    }

    /// Copy of the current subscribers, so dispatch can run while handlers
    /// register more listeners
    pub(crate) fn snapshot(&self) -> Vec<Subscription<A>> {
        self.subscriptions.clone()
    }
}

impl<A: Arg> Default for Mapping<A> {
    fn default() -> Self {
        Self::new()
    }
}
