//! Tri-state field for partial updates.
//!
//! The Tally API treats a missing key as "leave unchanged" and an explicit
//! `null` as "clear". `Option<T>` can only express one of those, so fields
//! that accept `null` use [`Nullable`] together with
//! `#[serde(default, skip_serializing_if = "Nullable::is_unset")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wire value that is either absent, explicitly `null`, or set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// Key omitted from the payload.
    Unset,
    /// Key present with a `null` value.
    Null,
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Nullable<T> {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Collapse into an `Option`, losing the unset/null distinction.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// The set value, if any. Both `Unset` and `Null` yield `None`.
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }
}

impl<T: std::ops::Deref> Nullable<T> {
    #[must_use]
    pub fn as_deref(&self) -> Option<&T::Target> {
        self.as_option().map(|value| &**value)
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Value))
    }
}
