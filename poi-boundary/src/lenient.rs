//! Deserializers for the loosely typed JSON of the ERP backend.
//!
//! Empty fields arrive as `false`, numbers sometimes as strings and
//! relations as `[id, "display name"]` pairs.

use serde::{de::IgnoredAny, Deserialize, Deserializer};

#[allow(dead_code)]
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Relation(i64, String),
    Other(IgnoredAny),
}

pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        Some(Scalar::Str(s)) if !s.trim().is_empty() => Some(s),
        Some(Scalar::Int(i)) => Some(i.to_string()),
        Some(Scalar::Float(f)) => Some(f.to_string()),
        Some(Scalar::Relation(_, name)) if !name.trim().is_empty() => Some(name),
        _ => None,
    })
}

pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string(deserializer)?.unwrap_or_default())
}

pub fn int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        Some(Scalar::Int(i)) | Some(Scalar::Relation(i, _)) => Some(i),
        Some(Scalar::Str(s)) => s.trim().parse().ok(),
        Some(Scalar::Float(f)) if f.fract() == 0.0 => Some(f as i64),
        _ => None,
    })
}

pub fn float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    let float = match value {
        Some(Scalar::Float(f)) => Some(f),
        Some(Scalar::Int(i)) => Some(i as f64),
        Some(Scalar::Str(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(float.filter(|f| f.is_finite()))
}
