use crate::fs::KeyValueMap;

pub const NAME_KEY: &str = "name";
pub const CREATED_AT_KEY: &str = "createdAt";

/// Numeric value of a `createdAt` timestamp.
///
/// Non-finite values (`NaN`, `inf`) are rejected so they cannot disturb the
/// ordering of a listing.
pub fn parse_created_at(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Key-value metadata persisted as a theme's information file.
///
/// Mutation is crate-private: every change goes through [`Theme`] setters so
/// the pending-write flag can never be skipped.
///
/// [`Theme`]: crate::theme::Theme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeMetadata {
    entries: KeyValueMap,
}

impl ThemeMetadata {
    pub(crate) fn new(name: &str, created_at: &str) -> Self {
        let mut entries = KeyValueMap::new();
        entries.insert(NAME_KEY.to_string(), name.to_string());
        entries.insert(CREATED_AT_KEY.to_string(), created_at.to_string());
        Self { entries }
    }

    /// Wrap a mapping read from disk, requiring both known keys.
    ///
    /// On failure the name of the first missing key is returned.
    pub(crate) fn from_map(entries: KeyValueMap) -> Result<Self, &'static str> {
        for key in [NAME_KEY, CREATED_AT_KEY] {
            if !entries.contains_key(key) {
                return Err(key);
            }
        }
        Ok(Self { entries })
    }

    pub(crate) fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub(crate) fn as_map(&self) -> &KeyValueMap {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn name(&self) -> &str {
        self.get(NAME_KEY).unwrap_or_default()
    }

    pub fn created_at(&self) -> &str {
        self.get(CREATED_AT_KEY).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
