// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Payload kinds and declared parameter shapes

use std::fmt;

/// Runtime classification of a payload value.
///
/// `accepts` is the subtyping relation: a parameter declared as `self`
/// takes an argument whose runtime kind is `actual`. It must be reflexive.
pub trait Kind: Copy + Eq + fmt::Debug + 'static {
    fn accepts(self, actual: Self) -> bool;
}

/// A value that can travel through the registry as an event argument
pub trait Arg: fmt::Debug + 'static {
    type Kind: Kind;

    fn kind(&self) -> Self::Kind;
}

/// Outcome of checking supplied arguments against a declared shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The handler declares no parameters and runs without payload
    Bare,
    /// Every position accepted; the handler runs with the arguments
    Full,
    /// Count or kind mismatch; the handler is skipped
    Rejected,
}

/// Ordered list of parameter kinds a handler declares
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape<K>(Vec<K>);

impl<K: Kind> Shape<K> {
    pub fn new(kinds: impl Into<Vec<K>>) -> Self {
        Self(kinds.into())
    }

    /// Shape of a handler that opts out of the payload
    pub fn bare() -> Self {
        Self(Vec::new())
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn kinds(&self) -> &[K] {
        &self.0
    }

    /// Match supplied arguments against this shape
    ///
    /// - no declared parameters: always runs, payload dropped
    /// - different argument count: skipped
    /// - any position not accepted: skipped
    pub fn admit<A: Arg<Kind = K>>(&self, args: &[A]) -> Admission {
        if self.0.is_empty() {
            return Admission::Bare;
        }
        if self.0.len() != args.len() {
            return Admission::Rejected;
        }
        let accepted = self
            .0
            .iter()
            .zip(args)
            .all(|(declared, arg)| declared.accepts(arg.kind()));
        if accepted {
            Admission::Full
        } else {
            Admission::Rejected
        }
    }
}

impl<K: Kind> From<Vec<K>> for Shape<K> {
    fn from(kinds: Vec<K>) -> Self {
        Self(kinds)
    }
}

impl<K: Kind, const N: usize> From<[K; N]> for Shape<K> {
    fn from(kinds: [K; N]) -> Self {
        Self(kinds.to_vec())
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
