// src/presentation/http/params.rs
use super::error::HttpError;
use std::collections::BTreeMap;

/// Decoded `application/x-www-form-urlencoded` submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams(Vec<(String, String)>);

impl FormParams {
    /// An empty body parses to no parameters.
    pub fn parse(body: &[u8]) -> Result<Self, HttpError> {
        serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
            .map(Self)
            .map_err(|err| HttpError::bad_request(format!("malformed form body: {err}")))
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Last value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Entries submitted as `scope[key]=value`, keyed by `key`.
    pub fn scoped(&self, scope: &str) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter_map(|(key, value)| {
                let inner = key
                    .strip_prefix(scope)?
                    .strip_prefix('[')?
                    .strip_suffix(']')?;
                Some((inner.to_string(), value.clone()))
            })
            .collect()
    }
}
