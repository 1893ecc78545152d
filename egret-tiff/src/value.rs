use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A decoded tag value
///
/// Numeric entries with a count of one decode to a scalar; larger counts
/// decode to [`Value::List`]. Rational types decode to the quotient as
/// [`Value::Float`] (NaN for a zero denominator). ASCII entries decode to a
/// single [`Value::Text`] regardless of count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    UInt(u32),
    Int(i32),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn as_uint(&self) -> Option<u32> {
        match self {
            Self::UInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::UInt(v) => Some(f64::from(*v)),
            Self::Int(v) => Some(f64::from(*v)),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Offset/count tags hold one integer or a list of them; normalize to a
    /// vector either way.
    pub fn uint_items(&self) -> Option<Vec<u32>> {
        match self {
            Self::UInt(v) => Some(vec![*v]),
            Self::List(items) => items.iter().map(Value::as_uint).collect(),
            _ => None,
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a number, string, null, or sequence")
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Value, E> {
        match u32::try_from(v) {
            Ok(v) => Ok(Value::UInt(v)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Value, E> {
        match i32::try_from(v) {
            Ok(v) => Ok(Value::Int(v)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_owned()))
    }

    // Non-finite floats serialize to JSON null; map null back to the
    // undefined sentinel on the way in.
    fn visit_unit<E: serde::de::Error>(self) -> Result<Value, E> {
        Ok(Value::Float(f64::NAN))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
