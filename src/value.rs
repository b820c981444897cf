use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// A number that keeps the I64 / U64 / F64 distinction so edited values are written
/// back with the same kind they were loaded with.
#[derive(Debug, Clone)]
pub enum SaveNumber {
    I64(i64),
    U64(u64),
    F64(f64),
}

// Integers compare by value whichever kind the parser picked; floats only equal floats.
impl PartialEq for SaveNumber {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SaveNumber::F64(a), SaveNumber::F64(b)) => a == b,
            (SaveNumber::F64(_), _) | (_, SaveNumber::F64(_)) => false,
            (SaveNumber::U64(a), SaveNumber::U64(b)) => a == b,
            (a, b) => a.as_i64().is_some() && a.as_i64() == b.as_i64(),
        }
    }
}

impl SaveNumber {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SaveNumber::I64(v) => Some(*v),
            SaveNumber::U64(v) => i64::try_from(*v).ok(),
            SaveNumber::F64(_) => None,
        }
    }
}

impl Serialize for SaveNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SaveNumber::I64(v) => serializer.serialize_i64(*v),
            SaveNumber::U64(v) => serializer.serialize_u64(*v),
            SaveNumber::F64(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for SaveNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumberVisitor;

        impl<'de> de::Visitor<'de> for NumberVisitor {
            type Value = SaveNumber;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(SaveNumber::I64(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(SaveNumber::U64(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(SaveNumber::F64(v))
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

/// Structured data held in behavior slots and record fields.
/// Behavior data is schema-less from the editor's point of view; each behavior defines its
/// own shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SaveValue {
    #[default]
    Null,
    Bool(bool),
    Number(SaveNumber),
    String(String),
    Array(Vec<SaveValue>),
    Object(IndexMap<String, SaveValue>),
}

impl SaveValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SaveValue::Null)
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, SaveValue>> {
        match self {
            SaveValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, SaveValue>> {
        match self {
            SaveValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SaveValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SaveValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&SaveValue> {
        self.as_object().and_then(|m| m.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SaveValue> {
        self.as_object_mut().and_then(|m| m.get_mut(key))
    }

    pub fn parse_json5(text: &str) -> anyhow::Result<SaveValue> {
        Ok(json5::from_str::<SaveValue>(text)?)
    }
}

impl From<i64> for SaveValue {
    fn from(v: i64) -> Self {
        SaveValue::Number(SaveNumber::I64(v))
    }
}

impl From<f64> for SaveValue {
    fn from(v: f64) -> Self {
        SaveValue::Number(SaveNumber::F64(v))
    }
}

impl From<&str> for SaveValue {
    fn from(v: &str) -> Self {
        SaveValue::String(v.to_owned())
    }
}

impl Serialize for SaveValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SaveValue::Null => serializer.serialize_unit(),
            SaveValue::Bool(v) => serializer.serialize_bool(*v),
            SaveValue::Number(n) => n.serialize(serializer),
            SaveValue::String(s) => serializer.serialize_str(s),
            SaveValue::Array(values) => values.serialize(serializer),
            SaveValue::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SaveValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> de::Visitor<'de> for ValueVisitor {
            type Value = SaveValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a save value")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(SaveValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(SaveValue::Null)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(SaveValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(SaveValue::Number(SaveNumber::I64(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(SaveValue::Number(SaveNumber::U64(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(SaveValue::Number(SaveNumber::F64(v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(SaveValue::String(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(SaveValue::String(v))
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut values = Vec::new();
                while let Some(value) = seq.next_element::<SaveValue>()? {
                    values.push(value);
                }
                Ok(SaveValue::Array(values))
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut values = IndexMap::new();
                while let Some((key, value)) = map.next_entry::<String, SaveValue>()? {
                    values.insert(key, value);
                }
                Ok(SaveValue::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
