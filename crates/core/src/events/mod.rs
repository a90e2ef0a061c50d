// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for decoupling lifecycle callbacks from plugins
//!
//! This module provides:
//! - `EventRegistry` - Route named events to every subscriber whose shape matches
//! - `Subscription` / `Mapping` - Per-event, insertion-ordered, duplicate-free subscriber sets
//! - `Shape` - Declared parameter kinds and the matching rule

mod kind;
mod mapping;
mod name;
mod registry;
mod subscription;

pub use kind::{Admission, Arg, Kind, Shape};
pub use mapping::Mapping;
pub use name::EventName;
pub use registry::{EventRegistry, RegistryConfig};
pub use subscription::{HandlerId, Listener, ListenerId, Subscription, Subscriptions};
