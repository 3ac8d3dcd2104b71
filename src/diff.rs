//! キー集合の差分計算

use crate::arb::ArbFile;
use crate::filter::KeyFilter;

/// 2 つの ARB ファイル間で片方にしか存在しないキー
///
/// どちらのリストも辞書順に並び、互いに素。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// base にあって target に無いキー
    pub missing_in_target: Vec<String>,

    /// target にあって base に無いキー
    pub missing_in_base: Vec<String>,
}

impl KeyDiff {
    /// 両方のファイルが同じキーを持つ場合 `true`
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.missing_in_target.is_empty() && self.missing_in_base.is_empty()
    }
}

/// base と target のキーを比較する
///
/// メタデータキーと無視パターンに一致するキーは比較前に取り除かれる。
#[must_use]
pub fn compare(base: &ArbFile, target: &ArbFile, filter: &KeyFilter) -> KeyDiff {
    let base_keys = base.translation_keys(filter);
    let target_keys = target.translation_keys(filter);

    let diff = KeyDiff {
        missing_in_target: base_keys.difference(&target_keys).map(|k| (*k).to_string()).collect(),
        missing_in_base: target_keys.difference(&base_keys).map(|k| (*k).to_string()).collect(),
    };

    tracing::debug!(
        "Compared {} base keys with {} target keys: {} missing in target, {} missing in base",
        base_keys.len(),
        target_keys.len(),
        diff.missing_in_target.len(),
        diff.missing_in_base.len()
    );

    diff
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::{
        Value,
        json,
    };

    use super::*;

    fn arb(path: &str, value: Value) -> ArbFile {
        let Value::Object(entries) = value else { unreachable!("fixture must be an object") };
        ArbFile::new(PathBuf::from(path), entries)
    }

    #[rstest]
    fn test_compare_reports_key_missing_in_target() {
        let base = arb(
            "app_en.arb",
            json!({"greeting": "Hello", "@greeting": {}, "farewell": "Bye"}),
        );
        let target = arb("app_ar.arb", json!({"greeting": "مرحبا"}));

        let diff = compare(&base, &target, &KeyFilter::default());

        assert_eq!(diff.missing_in_target, vec!["farewell".to_string()]);
        assert!(diff.missing_in_base.is_empty());
    }

    #[rstest]
    fn test_compare_identical_files() {
        let value = json!({"greeting": "Hello", "farewell": "Bye", "@@locale": "en"});
        let base = arb("a/app_en.arb", value.clone());
        let target = arb("b/app_en.arb", value);

        let diff = compare(&base, &target, &KeyFilter::default());

        assert!(diff.is_empty());
    }

    #[rstest]
    fn test_metadata_only_on_one_side_is_not_reported() {
        let base = arb("app_en.arb", json!({"greeting": "Hello", "@greeting": {}, "@@locale": "en"}));
        let target = arb("app_ar.arb", json!({"greeting": "مرحبا", "@extra": {}}));

        let diff = compare(&base, &target, &KeyFilter::default());

        assert_eq!(diff, KeyDiff::default());
    }

    #[googletest::test]
    fn test_compare_both_directions_sorted_and_disjoint() {
        let base = arb("app_en.arb", json!({"zeta": "z", "alpha": "a", "shared": "s", "mid": "m"}));
        let target = arb("app_ar.arb", json!({"shared": "s", "yankee": "y", "bravo": "b"}));

        let diff = compare(&base, &target, &KeyFilter::default());
        let overlaps = diff.missing_in_target.iter().any(|key| diff.missing_in_base.contains(key));

        expect_that!(overlaps, eq(false));
        expect_that!(diff.missing_in_target, elements_are![eq("alpha"), eq("mid"), eq("zeta")]);
        expect_that!(diff.missing_in_base, elements_are![eq("bravo"), eq("yankee")]);
    }

    #[rstest]
    fn test_compare_is_deterministic() {
        let base = arb("app_en.arb", json!({"b": "1", "a": "2", "c": "3"}));
        let target = arb("app_ar.arb", json!({"d": "4"}));
        let filter = KeyFilter::default();

        assert_eq!(compare(&base, &target, &filter), compare(&base, &target, &filter));
    }

    #[rstest]
    fn test_compare_respects_ignore_patterns() {
        let base = arb("app_en.arb", json!({"greeting": "Hello", "debugBanner": "DEBUG"}));
        let target = arb("app_ar.arb", json!({"greeting": "مرحبا"}));
        let filter = KeyFilter::new("@", &["debug*".to_string()]).unwrap();

        let diff = compare(&base, &target, &filter);

        assert!(diff.is_empty());
    }
}
