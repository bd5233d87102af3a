//! Opaque player identity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

/// Identifier of a participant's move-authorization token.
///
/// The engine never looks inside a `PlayerId`; it only compares two of them
/// for equality. Hosts either mint fresh identities with
/// [`PlayerId::generate`] or wrap identifiers they already own.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Creates a new, globally unique identity.
    #[instrument]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}
