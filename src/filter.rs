//! Decides which keys of an ARB file take part in a comparison.

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use crate::config::CompareSettings;

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Metadata prefix cannot be empty")]
    EmptyMetadataPrefix,

    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Excludes metadata keys and user-ignored keys from comparison.
#[derive(Debug, Clone)]
pub struct KeyFilter {
    /// Keys starting with this are metadata
    metadata_prefix: String,
    /// Compiled ignore patterns
    ignore_set: GlobSet,
}

impl KeyFilter {
    /// Creates a filter from a metadata prefix and ignore globs.
    ///
    /// `run` only reaches this with settings that passed
    /// `CompareSettings::validate`, so the errors here surface for library
    /// callers building a filter directly.
    pub fn new(
        metadata_prefix: impl Into<String>,
        ignore_patterns: &[String],
    ) -> Result<Self, FilterError> {
        let metadata_prefix = metadata_prefix.into();
        if metadata_prefix.is_empty() {
            return Err(FilterError::EmptyMetadataPrefix);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in ignore_patterns {
            let glob = Glob::new(pattern).map_err(|source| FilterError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }

        Ok(Self { metadata_prefix, ignore_set: builder.build()? })
    }

    /// Creates a filter from validated settings.
    pub fn from_settings(settings: &CompareSettings) -> Result<Self, FilterError> {
        Self::new(settings.metadata_prefix.clone(), &settings.ignore_keys)
    }

    #[must_use]
    pub fn is_metadata(&self, key: &str) -> bool {
        key.starts_with(&self.metadata_prefix)
    }

    #[must_use]
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignore_set.is_match(key)
    }

    /// Returns `true` if the key is a translatable entry to compare.
    #[must_use]
    pub fn accepts(&self, key: &str) -> bool {
        !self.is_metadata(key) && !self.is_ignored(key)
    }
}

impl Default for KeyFilter {
    fn default() -> Self {
        Self { metadata_prefix: "@".to_string(), ignore_set: GlobSet::empty() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("greeting", true)]
    #[case("@greeting", false)]
    #[case("@@locale", false)]
    #[case("email@domain", true)]
    fn test_default_filter_excludes_metadata(#[case] key: &str, #[case] expected: bool) {
        let filter = KeyFilter::default();

        assert_eq!(filter.accepts(key), expected);
    }

    #[rstest]
    fn test_ignore_patterns() {
        let filter =
            KeyFilter::new("@", &["debug*".to_string(), "legacy_?".to_string()]).unwrap();

        assert!(!filter.accepts("debugBanner"));
        assert!(!filter.accepts("legacy_1"));
        assert!(filter.accepts("legacy_10"));
        assert!(filter.accepts("greeting"));
    }

    #[rstest]
    fn test_custom_metadata_prefix() {
        let filter = KeyFilter::new("_", &[]).unwrap();

        assert!(filter.is_metadata("_comment"));
        assert!(!filter.is_metadata("@greeting"));
    }

    #[rstest]
    fn test_empty_prefix_is_rejected() {
        let result = KeyFilter::new("", &[]);

        assert!(matches!(result, Err(FilterError::EmptyMetadataPrefix)));
    }

    #[rstest]
    fn test_invalid_pattern_is_rejected() {
        let result = KeyFilter::new("@", &["broken[".to_string()]);

        let message = result.unwrap_err().to_string();
        assert_that!(message, contains_substring("broken["));
    }
}
