//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product record.
///
/// Wraps the store-assigned `ObjectId`; unique and immutable after creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(ObjectId);

impl ProductId {
    /// Create a new identifier (time-ordered, like the ones the store assigns).
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ObjectId> for ProductId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<ProductId> for ObjectId {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let oid = ObjectId::parse_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(oid))
    }
}
