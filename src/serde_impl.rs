//! `serde` support, using the same data model as `Option<T>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::of)
    }
}
