//! Type-safe identifier wrappers around [`String`].
//!
//! Content identifiers (items, areas, sections, collections) are authored
//! strings such as `"good-egg-dino-piranha"` and must be globally unique
//! within a collection. Wrapping them prevents passing an area id where an
//! item id is expected. Profile identifiers are generated as UUID v7 strings
//! but are otherwise opaque.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner [`String`] value.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a collectible item (a star, a coin, a trophy).
    ItemId
}

define_id! {
    /// Unique identifier for an area (a galaxy, a level).
    AreaId
}

define_id! {
    /// Unique identifier for a section (a dome, a world group).
    SectionId
}

define_id! {
    /// Unique identifier for a whole collection (one game).
    CollectionId
}

define_id! {
    /// Unique identifier for a player profile.
    ProfileId
}

impl ProfileId {
    /// Generate a fresh profile identifier using UUID v7 (time-ordered).
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn display_matches_inner_string() {
        let id = ItemId::new("gateway-grand-star");
        assert_eq!(id.to_string(), "gateway-grand-star");
        assert_eq!(id.as_str(), "gateway-grand-star");
    }

    #[test]
    fn serializes_as_bare_string() {
        let id = AreaId::from("good-egg");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"good-egg\"");
        let back: AreaId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(ItemId::new("a"), 1_u32);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), None);
    }

    #[test]
    fn generated_profile_ids_are_unique() {
        let a = ProfileId::generate();
        let b = ProfileId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }
}
