use std::collections::BTreeMap;

use serde::Serialize;

/// A declared default that ended up in the target record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedDefault {
    /// The raw default string, as declared on the field.
    pub value: String,
}

/// Which fields hold their declared default after a merge, by config key.
///
/// During a walk this doubles as the pending set: a field with a default is
/// registered before the table is consulted and removed again once a file
/// value decodes successfully. Whatever is left was defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AppliedDefaults(BTreeMap<String, AppliedDefault>);

impl AppliedDefaults {
    pub fn get(&self, key: &str) -> Option<&AppliedDefault> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AppliedDefault)> {
        self.0.iter().map(|(k, d)| (k.as_str(), d))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub(crate) fn register(&mut self, key: &str, value: &str) {
        self.0.insert(
            key.to_string(),
            AppliedDefault {
                value: value.to_string(),
            },
        );
    }

    pub(crate) fn resolve(&mut self, key: &str) {
        self.0.remove(key);
    }
}
