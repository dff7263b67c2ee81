//! Wire shapes returned by the legacy API.
//!
//! Decoding is lenient: a missing, null or mistyped field decodes to `None`
//! instead of failing, so the read path keeps succeeding once data arrives.
//! Only a payload whose top-level shape is wrong is rejected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A user record as served under `/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyUser {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub address: Option<LegacyAddress>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub company: Option<LegacyCompany>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyAddress {
    #[serde(deserialize_with = "lenient")]
    pub street: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub suite: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub zipcode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyCompany {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub catch_phrase: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub bs: Option<String>,
}

/// A post record as served under `/posts`, reinterpreted as a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyPost {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient_id")]
    pub user_id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub body: Option<String>,
    /// Not part of the public legacy API; honoured when a deployment adds it.
    #[serde(deserialize_with = "lenient")]
    pub created_at: Option<String>,
}

/// A collection payload. The payload itself must be an array; an element
/// that is not a record decodes to an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyList<T>(pub Vec<T>);

impl<T> LegacyList<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T> Deserialize<'de> for LegacyList<T>
where
    T: DeserializeOwned + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<Value>::deserialize(deserializer)?;
        Ok(Self(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ))
    }
}

/// Any value that does not decode as `T` becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Identifiers arrive as numbers, occasionally as numeric strings.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
