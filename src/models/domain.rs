use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A job posting reduced to the schema shared by every source
///
/// Every field tolerates being absent or `null`; the upstream normalizers are
/// not trusted to be complete. Keys this struct does not know about are kept in
/// `extra` and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedJob {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub remote: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub work_mode: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub employment_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub seniority: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub salary_min: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub salary_max: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub salary_currency: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub posted_date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description_text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub apply_url: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub departments: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub verification_status: String,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub preliminary_relevance_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub matched_keywords: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::alternate_sources",
        skip_serializing_if = "Option::is_none"
    )]
    pub alternate_sources: Option<Vec<AlternateSource>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NormalizedJob {
    /// Relevance score, treating an unscored record as 0
    pub fn score(&self) -> f64 {
        self.preliminary_relevance_score.unwrap_or(0.0)
    }

    /// Provenance entry pointing back at this record
    pub fn as_alternate_source(&self) -> AlternateSource {
        AlternateSource {
            source: self.source.clone(),
            url: self.url.clone(),
            source_id: self.source_id.clone(),
        }
    }
}

/// Another source a merged record was also seen on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateSource {
    #[serde(default, deserialize_with = "lenient::string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source_id: String,
}

/// Field decoders that fall back to an empty value instead of failing
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::AlternateSource;

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(value_to_string(Value::deserialize(deserializer)?))
    }

    pub fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,
            other => Some(value_to_string(other)),
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        })
    }

    /// Integers, floats and integer strings; anything else is dropped.
    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        })
    }

    pub fn string_list<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        Ok(value_to_list(Value::deserialize(deserializer)?))
    }

    pub fn optional_string_list<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,
            other => Some(value_to_list(other)),
        })
    }

    /// A list of provenance objects; any other shape is dropped.
    pub fn alternate_sources<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<AlternateSource>>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => serde_json::from_value(Value::Array(items)).ok(),
            _ => None,
        })
    }

    fn value_to_string(value: Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        }
    }

    fn value_to_list(value: Value) -> Vec<String> {
        match value {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(value_to_string)
                .collect(),
            Value::String(s) if s.is_empty() => Vec::new(),
            other => vec![value_to_string(other)],
        }
    }
}
