//! Identifier codec.
//!
//! Every node of the content tree is addressed by an opaque 128-bit identifier.
//! On the wire identifiers travel as strings; this module converts between the
//! two representations.
//!
//! ## String Forms
//!
//! Parsing accepts the canonical hyphenated form in any letter case, as well as
//! the simple, braced and URN forms. Formatting always produces the canonical
//! lowercase hyphenated form (36 characters), so canonical strings round-trip
//! unchanged.
//!
//! ## The Empty Identifier
//!
//! The nil identifier ([`Identifier::EMPTY`]) is reserved to mean "no node", in
//! particular "no parent" when a data value is attached to the tree root.

use std::{fmt::Display, str::FromStr};

use uuid::Uuid;

use crate::endpoint::error::DataValueError;

/// Opaque 128-bit identifier of a tree node.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Identifier(Uuid);

impl Identifier {
    /// The distinguished empty identifier.
    pub const EMPTY: Identifier = Identifier(Uuid::nil());

    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Generates a fresh random identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier from its string form.
    ///
    /// Blank and malformed inputs are rejected.
    pub fn parse(input: &str) -> Result<Self, DataValueError> {
        Uuid::try_parse(input.trim())
            .map(Self)
            .map_err(|_| DataValueError::InvalidIdentifier(input.to_owned()))
    }

    /// Parses an optional identifier, mapping absent or blank input to `None`.
    pub fn parse_optional(input: Option<&str>) -> Result<Option<Self>, DataValueError> {
        match input {
            Some(input) if !input.trim().is_empty() => Self::parse(input).map(Some),
            _ => Ok(None),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<u128> for Identifier {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl FromStr for Identifier {
    type Err = DataValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_identifier_round_trip_canonical() {
        for input in [
            "11111111-1111-1111-1111-111111111111",
            "6f1c2a4e-93b7-4d0e-8a55-0c9e2f7b1d3a",
            "00000000-0000-0000-0000-000000000000",
        ] {
            assert_eq!(Identifier::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn unit_identifier_accepts_other_forms() {
        let canonical = "6f1c2a4e-93b7-4d0e-8a55-0c9e2f7b1d3a";
        for input in [
            "6F1C2A4E-93B7-4D0E-8A55-0C9E2F7B1D3A",
            "6f1c2a4e93b74d0e8a550c9e2f7b1d3a",
            "{6f1c2a4e-93b7-4d0e-8a55-0c9e2f7b1d3a}",
            "urn:uuid:6f1c2a4e-93b7-4d0e-8a55-0c9e2f7b1d3a",
            "  6f1c2a4e-93b7-4d0e-8a55-0c9e2f7b1d3a ",
        ] {
            assert_eq!(Identifier::parse(input).unwrap().to_string(), canonical);
        }
    }

    #[test]
    fn unit_identifier_rejects_malformed() {
        for input in ["", "   ", "not-an-id", "11111111-1111-1111-1111-11111111111", "-1"] {
            assert_eq!(
                Identifier::parse(input),
                Err(DataValueError::InvalidIdentifier(input.to_string()))
            );
        }
        assert_eq!(
            Identifier::parse("zz").unwrap_err().to_string(),
            "Data value error, invalid identifier (input: \"zz\")"
        );
    }

    #[test]
    fn unit_identifier_parse_optional() {
        assert_eq!(Identifier::parse_optional(None), Ok(None));
        assert_eq!(Identifier::parse_optional(Some("")), Ok(None));
        assert_eq!(Identifier::parse_optional(Some(" \t")), Ok(None));
        assert_eq!(
            Identifier::parse_optional(Some("11111111-1111-1111-1111-111111111111")),
            Ok(Some(Identifier::from_u128(0x11111111_1111_1111_1111_111111111111)))
        );
        assert!(Identifier::parse_optional(Some("bogus")).is_err());
    }

    #[test]
    fn unit_identifier_random_and_empty() {
        let id = Identifier::new_random();
        assert!(!id.is_empty());
        assert_ne!(id, Identifier::new_random());
        assert_eq!(id.to_string().len(), 36);
        assert!(Identifier::EMPTY.is_empty());
        assert_eq!(Identifier::default(), Identifier::EMPTY);
    }
}
