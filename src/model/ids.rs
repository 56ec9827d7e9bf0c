//! Numeric identifiers for pathways, events and relationships
//!
//! Source tables write these as prefixed strings (`Aop:23`, `Event:17`,
//! `Relationship:5`). Parsing accepts the prefixed form or a bare integer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an identifier cell cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} id: {value:?}")]
pub struct IdParseError {
    pub kind: &'static str,
    pub value: String,
}

/// Strip an optional `Prefix:` (case-insensitive) and parse the rest as u32.
fn parse_prefixed(value: &str, prefix: &str, kind: &'static str) -> Result<u32, IdParseError> {
    let trimmed = value.trim();
    let digits = match trimmed.split_once(':') {
        Some((head, tail)) if head.eq_ignore_ascii_case(prefix) => tail.trim(),
        Some(_) => trimmed,
        None => trimmed,
    };
    digits.parse().map_err(|_| IdParseError {
        kind,
        value: value.to_string(),
    })
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_prefixed(s, $prefix, $kind).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of one Adverse Outcome Pathway
    AopId,
    "Aop",
    "AOP"
);

numeric_id!(
    /// Identifier of one Key Event
    EventId,
    "Event",
    "event"
);

numeric_id!(
    /// Identifier of one Key Event Relationship
    RelationshipId,
    "Relationship",
    "relationship"
);
