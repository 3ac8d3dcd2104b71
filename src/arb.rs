//! ARB (Application Resource Bundle) ファイルの読み込み

/// ARB file loader
mod loader;

use std::collections::BTreeSet;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};

pub use loader::{
    LoadError,
    load_arb_file,
};

use crate::filter::KeyFilter;

/// ARB ファイルが自身のロケールを宣言するグローバルメタデータキー
pub const LOCALE_KEY: &str = "@@locale";

/// 読み込み済みの ARB ファイル
///
/// 読み込み後は不変。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbFile {
    /// 読み込み元のパス
    path: PathBuf,

    /// トップレベルのキー → 値のマッピング (メタデータを含む)
    entries: Map<String, Value>,
}

impl ArbFile {
    #[must_use]
    pub const fn new(path: PathBuf, entries: Map<String, Value>) -> Self {
        Self { path, entries }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `@@locale` に宣言されたロケール
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.entries.get(LOCALE_KEY).and_then(Value::as_str).filter(|locale| !locale.is_empty())
    }

    /// 比較対象となるキーの集合 (辞書順)
    #[must_use]
    pub fn translation_keys(&self, filter: &KeyFilter) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).filter(|key| filter.accepts(key)).collect()
    }

    /// レポートの見出しに使う名前
    ///
    /// `@@locale` があればそれを、無ければファイル名を返す。
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(locale) = self.locale() {
            return locale.to_string();
        }
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().to_string(),
        )
    }
}
