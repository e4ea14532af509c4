use serde::{Deserialize, Serialize};

use crate::{Encode, Value};

/// Encode a value as json text.
///
/// Firebird has no json type, the document is bound as text parameter.
///
/// # Panics
///
/// Note that when performing [`Encode`], if [`Serialize`] implementation decide
/// to fail, it will will panics.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T: Serialize> Encode<'static> for Json<T> {
    fn encode(self) -> Value<'static> {
        Value::Text(serde_json::to_string(&self.0).unwrap().into())
    }
}

impl<T: Serialize> Serialize for Json<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Json<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self(T::deserialize(deserializer)?))
    }
}
