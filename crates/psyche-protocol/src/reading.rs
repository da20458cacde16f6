//! The reading contract — output of one resolution call.

use serde::{Deserialize, Serialize};

/// Minimum situation length accepted by the resolver, in characters
/// (counted after trimming). Shorter input is rejected before any
/// generator call is made.
pub const MIN_SITUATION_CHARS: usize = 6;

/// A resolved reading: one Major Arcana card plus its interpretation.
///
/// Invariants: `card_id <= 21`, `interpretation` is non-empty after
/// trimming. Produced fresh per request and owned by the caller — the
/// pipeline never caches or persists readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Selected card id, 0–21.
    pub card_id: u8,
    /// Narrative interpretation text (Russian).
    pub interpretation: String,
}
