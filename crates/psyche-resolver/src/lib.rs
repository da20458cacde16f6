//! Situation-to-archetype resolution core.
//!
//! Turns free-text situation descriptions into a validated [`Reading`]
//! (card id + interpretation) via an unreliable external text generator.
//!
//! Two tiers:
//! - **Generator** (remote): one completion attempt against a vendor API,
//!   parsed and validated into the two-field reading contract.
//! - **Local oracle** (fallback): deterministic, network-free substitute
//!   that absorbs every transport, parse, and validation failure.
//!
//! The caller only ever observes a successful reading or an
//! [`InvalidSituation`] precondition error.
//!
//! [`Reading`]: psyche_protocol::Reading

pub mod generator;
pub mod oracle;
pub mod prompt;
pub mod resolver;

pub use generator::{
    GeminiClient, GeminiConfig, GeneratorError, OpenRouterClient, OpenRouterConfig, TextGenerator,
};
pub use oracle::LocalOracle;
pub use resolver::{InvalidSituation, Resolver};
