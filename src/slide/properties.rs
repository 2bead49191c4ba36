//! String-keyed slide property map.
//!
//! Slide-decoding backends expose metadata as a flat string-to-string map
//! (OpenSlide-style `"openslide.*"` keys). Keys may be absent, and values may
//! fail to parse; both cases fall back to a caller-supplied default rather
//! than erroring, so metadata extraction never fails on optional properties.

use std::collections::HashMap;

/// Property key for the scanner vendor name.
pub const PROP_VENDOR: &str = "openslide.vendor";

/// Property key for the horizontal pixel spacing in microns per pixel.
pub const PROP_MPP_X: &str = "openslide.mpp-x";

/// Property key for the vertical pixel spacing in microns per pixel.
pub const PROP_MPP_Y: &str = "openslide.mpp-y";

/// A string-keyed metadata map with optional-lookup-with-default access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: HashMap<String, String>,
}

impl PropertyMap {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style insert for constructing maps inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a property value, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Look up and parse a float property.
    ///
    /// Absent keys and unparseable values both yield `default`, matching how
    /// scanner metadata is treated elsewhere: a malformed optional property
    /// is the same as a missing one.
    pub fn get_f64_or(&self, key: &str, default: f64) -> f64 {
        self.get(key)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(default)
    }

    /// Number of properties in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for PropertyMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, String)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
