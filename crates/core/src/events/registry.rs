// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event registry routing named events to matching subscribers

use super::kind::{Admission, Arg};
use super::mapping::Mapping;
use super::name::EventName;
use super::subscription::{Listener, Subscription, Subscriptions};
use crate::error::InvokeError;
use crate::logger::Logger;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Registry tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Maximum nesting of `send` calls raised from inside handlers
    pub max_depth: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// The event registry owns one mapping per event name.
///
/// Dispatch is synchronous and single-threaded. Handlers receive the
/// registry itself and may `send` or `register` from inside a dispatch.
pub struct EventRegistry<A: Arg> {
    mappings: RefCell<HashMap<EventName, Mapping<A>>>,
    logger: Rc<dyn Logger>,
    config: RegistryConfig,
    depth: Cell<usize>,
}

impl<A: Arg> EventRegistry<A> {
    pub fn new(logger: Rc<dyn Logger>) -> Self {
        Self::with_config(logger, RegistryConfig::default())
    }

    pub fn with_config(logger: Rc<dyn Logger>, config: RegistryConfig) -> Self {
        Self {
            mappings: RefCell::new(HashMap::new()),
            logger,
            config,
            depth: Cell::new(0),
        }
    }

    /// Attach every handler the listener type declares
    pub fn register<L: Listener<A>>(&self, listener: &Rc<L>) {
        let mut table = Subscriptions::new();
        L::subscriptions(&mut table);

        for (event, subscription) in table.bind(listener) {
            let label = subscription.label().to_string();
            let inserted = self
                .mappings
                .borrow_mut()
                .entry(event.clone())
                .or_default()
                .add(subscription);
            if inserted {
                self.logger
                    .log(format_args!("Registering {} to {}.", label, event));
            }
        }
    }

    /// Dispatch `event` to every subscriber whose shape admits `args`, in
    /// registration order.
    ///
    /// Never fails: handler errors and panics are logged and the next
    /// subscriber runs.
    pub fn send(&self, event: &str, args: &[A]) {
        let depth = self.depth.get();
        if depth >= self.config.max_depth {
            self.logger.log(format_args!(
                "Dropping {} at dispatch depth {} (limit {}).",
                event, depth, self.config.max_depth
            ));
            return;
        }

        let subscriptions = self.snapshot(event);
        tracing::trace!(event, subscribers = subscriptions.len(), depth, "dispatching");

        self.depth.set(depth + 1);
        for subscription in &subscriptions {
            let payload: &[A] = match subscription.shape().admit(args) {
                Admission::Bare => &[],
                Admission::Full => args,
                Admission::Rejected => continue,
            };
            if let Err(error) = subscription.invoke(self, payload) {
                self.report(subscription, &error);
            }
        }
        self.depth.set(depth);
    }

    /// Number of subscriptions for `event`
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.mappings
            .borrow()
            .get(event)
            .map(Mapping::len)
            .unwrap_or(0)
    }

    /// Every event name referenced so far, sorted
    pub fn event_names(&self) -> Vec<EventName> {
        let mut names: Vec<EventName> = self.mappings.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    /// True when no subscription has been registered
    pub fn is_empty(&self) -> bool {
        self.mappings.borrow().values().all(Mapping::is_empty)
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    pub fn logger(&self) -> &Rc<dyn Logger> {
        &self.logger
    }

    /// Current subscribers of `event`, creating its mapping on first reference
    fn snapshot(&self, event: &str) -> Vec<Subscription<A>> {
        let mut mappings = self.mappings.borrow_mut();
        match mappings.get(event) {
            Some(mapping) => mapping.snapshot(),
            None => {
                mappings.insert(EventName::from(event), Mapping::new());
                Vec::new()
            }
        }
    }

    fn report(&self, subscription: &Subscription<A>, error: &InvokeError) {
        self.logger.log(format_args!(
            "Error while invoking {}:\n\t{} - {}",
            subscription.label(),
            error.kind(),
            error
        ));
        self.logger.log_error(error);
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
