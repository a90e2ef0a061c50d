// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rb-core: the event registry behind Robobus
//!
//! This crate provides:
//! - `EventRegistry` - synchronous, re-entrant publish/subscribe keyed by event name
//! - `Listener` / `Subscriptions` - explicit subscription tables declared per listener type
//! - `Arg` / `Kind` / `Shape` - payload classification and parameter-shape matching
//! - `Logger` - the diagnostic side channel the registry reports through

pub mod error;
pub mod events;
pub mod id;
pub mod logger;

#[cfg(test)]
mod testing;

// Re-exports
pub use error::{HandlerError, HandlerResult, InvokeError};
pub use events::{
    Admission, Arg, EventName, EventRegistry, HandlerId, Kind, Listener, ListenerId, Mapping,
    RegistryConfig, Shape, Subscription, Subscriptions,
};
pub use id::{IdGen, SequentialIdGen};
pub use logger::{error_chain, Logger};
