//! Tri-state optional field: not provided, explicit null, or a value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// State of an optional record field.
///
/// Fields of this type must be declared with
/// `#[serde(default, skip_serializing_if = "Presence::is_not_provided")]`
/// so that an absent key decodes to [`Presence::NotProvided`] and is omitted
/// again on encode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Presence<T> {
    /// The key was absent from the input.
    #[default]
    NotProvided,
    /// The key was present with a JSON `null`.
    Null,
    /// The key was present with a value.
    Value(T),
}

impl<T> Presence<T> {
    pub fn is_not_provided(&self) -> bool {
        matches!(self, Presence::NotProvided)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Presence::Null)
    }

    /// The value, collapsing "not provided" and "null" into `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Presence::Value(v) => Some(v),
            Presence::NotProvided | Presence::Null => None,
        }
    }

    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Presence::NotProvided => Presence::NotProvided,
            Presence::Null => Presence::Null,
            Presence::Value(v) => Presence::Value(v),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Value(v) => Some(v),
            Presence::NotProvided | Presence::Null => None,
        }
    }
}

impl Presence<String> {
    pub fn as_deref(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

impl<T: Serialize> Serialize for Presence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Presence::Value(v) => v.serialize(serializer),
            Presence::NotProvided | Presence::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Presence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Presence::Value(v),
            None => Presence::Null,
        })
    }
}
