//! # repgate-signals — Signal Normalization
//!
//! Converts a heterogeneous third-party reputation profile into the
//! fixed [`NormalizedSignals`] record the decision evaluator consumes,
//! plus a signal-coverage fraction that lets later rules distinguish
//! "confidently low" from "we don't know".
//!
//! ## Architecture
//!
//! - **Profile** (`profile.rs`): the raw provider payload — three
//!   independently-optional sources (trust, social, capability), each of
//!   which may be fetched, missing, or failed.
//! - **Thresholds** (`thresholds.rs`): fixed, versioned, ordered bucket
//!   tables mapping raw scores to tiers and capability levels.
//! - **Normalize** (`normalize.rs`): availability resolution, defaults
//!   for missing sources, coverage weighting, and recency-day
//!   computation.
//!
//! ## Crate Policy
//!
//! - `NormalizedSignals` is ephemeral: constructed fresh per decision
//!   request and never persisted.
//! - Raw provider scores never leave this crate.
//! - No `unsafe`, no `unwrap()` outside tests.

pub mod normalize;
pub mod profile;
pub mod thresholds;

pub use normalize::{normalize_signals, NormalizedSignals};
pub use profile::{ProviderProfile, SourceFetch};
pub use thresholds::NORMALIZATION_VERSION;
