// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription tables and bound subscriptions

use super::kind::{Arg, Shape};
use super::name::EventName;
use super::registry::EventRegistry;
use crate::error::{HandlerResult, InvokeError};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

/// A type whose instances react to named events.
///
/// Implementors list their handlers once per type; the registry binds the
/// table to a concrete instance at `register` time. Handlers get `&self`
/// because a listener may be re-entered by a nested send; keep mutable
/// state in `Cell`/`RefCell` fields.
pub trait Listener<A: Arg>: Sized + 'static {
    fn subscriptions(table: &mut Subscriptions<Self, A>);
}

type HandlerFn<L, A> = dyn Fn(&L, &EventRegistry<A>, &[A]) -> HandlerResult;
type InvokeFn<A> = dyn Fn(&EventRegistry<A>, &[A]) -> Result<(), InvokeError>;

struct Entry<L, A: Arg> {
    events: Vec<EventName>,
    selector: &'static str,
    shape: Shape<A::Kind>,
    handler: Rc<HandlerFn<L, A>>,
}

/// Builder for a listener type's handler table
pub struct Subscriptions<L, A: Arg> {
    entries: Vec<Entry<L, A>>,
}

impl<L: 'static, A: Arg> Subscriptions<L, A> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Subscribe `selector` to every name in `events` with a declared shape.
    ///
    /// The handler only runs when the sent arguments match `shape`; an empty
    /// shape behaves like [`Subscriptions::when_bare`].
    pub fn when<F>(
        &mut self,
        events: &[&str],
        selector: &'static str,
        shape: impl Into<Shape<A::Kind>>,
        handler: F,
    ) -> &mut Self
    where
        F: Fn(&L, &EventRegistry<A>, &[A]) -> HandlerResult + 'static,
    {
        self.entries.push(Entry {
            events: events.iter().map(|e| EventName::from(*e)).collect(),
            selector,
            shape: shape.into(),
            handler: Rc::new(handler),
        });
        self
    }

    /// Subscribe a handler that takes no payload; it runs for every send of
    /// the named events regardless of the arguments.
    pub fn when_bare<F>(&mut self, events: &[&str], selector: &'static str, handler: F) -> &mut Self
    where
        F: Fn(&L, &EventRegistry<A>) -> HandlerResult + 'static,
    {
        self.when(events, selector, Shape::bare(), move |this, registry, _| {
            handler(this, registry)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bind every (handler, event name) pair to `listener`
    pub(crate) fn bind(self, listener: &Rc<L>) -> Vec<(EventName, Subscription<A>)> {
        let listener_id = ListenerId::of(listener);
        let type_name = short_type_name::<L>();
        let mut bound = Vec::new();

        for entry in self.entries {
            let id = HandlerId {
                listener: listener_id,
                selector: entry.selector,
            };
            let label: Rc<str> = format!("{}::{}", type_name, entry.selector).into();
            let invoke = bind_handler(Rc::downgrade(listener), entry.handler);

            for event in entry.events {
                bound.push((
                    event,
                    Subscription {
                        id,
                        label: Rc::clone(&label),
                        shape: entry.shape.clone(),
                        invoke: Rc::clone(&invoke),
                    },
                ));
            }
        }
        bound
    }
}

fn bind_handler<L: 'static, A: Arg>(
    listener: Weak<L>,
    handler: Rc<HandlerFn<L, A>>,
) -> Rc<InvokeFn<A>> {
    Rc::new(move |registry: &EventRegistry<A>, args: &[A]| {
        // Dropped listeners are skipped silently
        let Some(listener) = listener.upgrade() else {
            return Ok(());
        };
        match panic::catch_unwind(AssertUnwindSafe(|| handler(&*listener, registry, args))) {
            Ok(result) => result.map_err(InvokeError::Handler),
            Err(payload) => Err(InvokeError::from_panic(payload)),
        }
    })
}

fn short_type_name<L>() -> &'static str {
    let full = std::any::type_name::<L>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Identity of a listener instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

impl ListenerId {
    /// Identity is the address of the shared allocation. Subscriptions keep
    /// a weak reference, which pins the allocation, so an address is never
    /// reused while a subscription to it exists.
    pub fn of<L>(listener: &Rc<L>) -> Self {
        Self(Rc::as_ptr(listener) as *const () as usize)
    }
}

/// Identity of a subscription: listener instance plus handler selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId {
    pub listener: ListenerId,
    pub selector: &'static str,
}

/// One handler of one listener instance, bound for one event name
pub struct Subscription<A: Arg> {
    id: HandlerId,
    label: Rc<str>,
    shape: Shape<A::Kind>,
    invoke: Rc<InvokeFn<A>>,
}

impl<A: Arg> Subscription<A> {
    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// `Listener::selector`, used in diagnostics
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shape(&self) -> &Shape<A::Kind> {
        &self.shape
    }

    /// Run the handler with an already admitted payload
    pub(crate) fn invoke(&self, registry: &EventRegistry<A>, args: &[A]) -> Result<(), InvokeError> {
        (self.invoke)(registry, args)
    }
}

impl<A: Arg> Clone for Subscription<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            label: Rc::clone(&self.label),
            shape: self.shape.clone(),
            invoke: Rc::clone(&self.invoke),
        }
    }
}

impl<A: Arg> PartialEq for Subscription<A> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<A: Arg> Eq for Subscription<A> {}

impl<A: Arg> fmt::Debug for Subscription<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("handler", &self.label)
            .field("shape", &self.shape)
            .finish()
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
