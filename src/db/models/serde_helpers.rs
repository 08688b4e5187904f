//! Record id (de)serialization
//!
//! SurrealDB hands record ids back in its native form while API clients
//! send and receive them as "table:key" strings. The modules here are
//! used as `#[serde(with = ...)]` targets on the models so both shapes
//! deserialize and every outbound id is the plain string.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserializer, Serializer};
use surrealdb::RecordId;

struct RecordIdVisitor;

impl<'de> Visitor<'de> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a \"table:key\" string or a native record id")
    }

    fn visit_str<E>(self, v: &str) -> Result<RecordId, E>
    where
        E: de::Error,
    {
        v.parse()
            .map_err(|_| de::Error::custom(format_args!("invalid record id: {v}")))
    }

    fn visit_map<M>(self, map: M) -> Result<RecordId, M::Error>
    where
        M: MapAccess<'de>,
    {
        serde::Deserialize::deserialize(de::value::MapAccessDeserializer::new(map))
    }
}

/// `RecordId` as a "table:key" string
pub mod record_id {
    use super::*;

    pub fn serialize<S>(id: &RecordId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(id)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<RecordId, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(RecordIdVisitor)
    }
}

/// `Option<RecordId>` as an optional "table:key" string
pub mod option_record_id {
    use super::*;

    pub fn serialize<S>(id: &Option<RecordId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id {
            Some(id) => s.collect_str(id),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptVisitor;

        impl<'de> Visitor<'de> for OptVisitor {
            type Value = Option<RecordId>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an optional record id")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_some<D2>(self, d: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                d.deserialize_any(RecordIdVisitor).map(Some)
            }
        }

        d.deserialize_option(OptVisitor)
    }
}
