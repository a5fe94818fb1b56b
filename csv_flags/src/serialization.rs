//! `serde` support so list values can be layered through configuration
//! providers such as `figment`.
//!
//! Lists serialize as a sequence of strings. Deserializing accepts either a
//! sequence of strings, kept verbatim, or a single string, split on commas
//! exactly like a command-line value. Numbers and booleans are rejected in
//! both shapes; read environment variables through [`crate::TextEnv`] so
//! numeric-looking text stays text.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{FlagKind, StringList};

impl<K: FlagKind> Serialize for StringList<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, K: FlagKind> Deserialize<'de> for StringList<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ListVisitor(PhantomData))
    }
}

struct ListVisitor<K>(PhantomData<K>);

impl<'de, K: FlagKind> Visitor<'de> for ListVisitor<K> {
    type Value = StringList<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a comma-separated string or a sequence of strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(StringList::from_vec(StringList::<K>::split(v)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(value) = seq.next_element::<String>()? {
            values.push(value);
        }
        Ok(StringList::from_vec(values))
    }
}
