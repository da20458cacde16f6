//! The Response Resolver — one situation in, one validated reading out.
//!
//! Exactly one generator attempt per call. Transport failures, malformed
//! payloads, out-of-range ids, and empty narratives all route to the local
//! oracle; the caller only ever sees a reading or an [`InvalidSituation`]
//! precondition error.

use std::sync::Arc;

use serde::Deserialize;

use psyche_protocol::{MIN_SITUATION_CHARS, Reading};

use crate::generator::TextGenerator;
use crate::oracle::LocalOracle;
use crate::prompt;

/// Caller-level precondition violation — the only error `resolve` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSituation {
    #[error("situation text is empty")]
    Empty,

    #[error("situation text is too short: {len} chars (minimum {MIN_SITUATION_CHARS})")]
    TooShort { len: usize },
}

/// Raw two-field payload the generator is instructed to emit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReading {
    card_id: i64,
    interpretation: String,
}

/// Resolves situations against an injected [`TextGenerator`], falling back
/// to the [`LocalOracle`] on any remote failure. Stateless across calls and
/// usable concurrently behind an `Arc`.
pub struct Resolver {
    generator: Arc<dyn TextGenerator>,
    oracle: LocalOracle,
    system_context: String,
}

impl Resolver {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            oracle: LocalOracle::new(),
            system_context: prompt::system_context(),
        }
    }

    /// Resolve one situation into a reading.
    ///
    /// Returns `Err` only for the input precondition (empty / too-short
    /// text), checked before any generator call. Everything past that point
    /// resolves to `Ok` — degraded to the oracle's reading when the remote
    /// path fails.
    pub async fn resolve(&self, situation: &str) -> Result<Reading, InvalidSituation> {
        let situation = situation.trim();
        if situation.is_empty() {
            return Err(InvalidSituation::Empty);
        }
        let len = situation.chars().count();
        if len < MIN_SITUATION_CHARS {
            return Err(InvalidSituation::TooShort { len });
        }

        // Single attempt — retries are the caller's concern.
        let payload = match self
            .generator
            .complete(&self.system_context, situation)
            .await
        {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(
                    provider = self.generator.provider_name(),
                    error = %e,
                    "generator call failed, serving local oracle reading"
                );
                return Ok(self.oracle.compute(situation));
            }
        };

        match parse_reading(&payload) {
            Ok(reading) => Ok(reading),
            Err(reason) => {
                tracing::warn!(
                    provider = self.generator.provider_name(),
                    reason,
                    payload = %payload,
                    "unusable generator reply, serving local oracle reading"
                );
                Ok(self.oracle.compute(situation))
            }
        }
    }
}

/// Parse and validate a raw generator payload into a reading.
///
/// Out-of-range ids are rejected to the fallback, never coerced to a
/// different valid-looking card.
fn parse_reading(payload: &str) -> Result<Reading, &'static str> {
    let cleaned = strip_fences(payload);

    let raw: RawReading =
        serde_json::from_str(cleaned).map_err(|_| "payload is not the two-field contract")?;

    if !(0..=21).contains(&raw.card_id) {
        return Err("card id out of range");
    }

    let interpretation = raw.interpretation.trim();
    if interpretation.is_empty() {
        return Err("empty interpretation");
    }

    Ok(Reading {
        card_id: raw.card_id as u8,
        interpretation: interpretation.to_string(),
    })
}

/// Strip an outer markdown code fence from generator output, if present.
/// No deeper repair — anything still malformed after this fails the parse.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();

    // Try ```json ... ``` first
    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    // Try ``` ... ```
    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    // Assume raw JSON
    trimmed
}
