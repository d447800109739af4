//! Core types for the vessel design crates.
//!
//! The [`constraint`] module provides [`Constrained<T, C>`](constraint::Constrained),
//! a wrapper that checks a numeric invariant once at construction so that
//! downstream calculations can rely on it without re-validating.

pub mod constraint;
