//! Format validation and date inference for periodic notes.
//!
//! Daily, weekly, monthly, quarterly and yearly notes are named with
//! moment.js-style format strings. This crate checks that such a format is a
//! legal filename, that it survives a format/parse round trip, whether it
//! stays unique across many consecutive periods, and which part of an
//! existing note's path should be parsed to recover its date.
//!
//! Date formatting and vault lookups are injected through the
//! [`calendar::DateEngine`] and [`vault::Vault`] traits.

pub mod calendar;
pub mod config;
pub mod granularity;
pub mod validation;
pub mod vault;

pub use granularity::Granularity;
