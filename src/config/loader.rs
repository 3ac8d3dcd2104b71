//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    CompareSettings,
    ConfigError,
};

/// 明示的に指定されなかった場合に探す設定ファイル名
pub const DEFAULT_CONFIG_FILE: &str = ".arb-compare.json";

/// 設定を読み込む
///
/// `explicit_path` が指定されていればそのファイルを必ず読み込み、
/// 指定されていなければカレントディレクトリの `.arb-compare.json` を探す。
///
/// # Arguments
/// * `explicit_path` - `--config` で指定された設定ファイルのパス
///
/// # Returns
/// - `Ok(settings)`: 読み込んだ設定 (既定ファイルが無い場合はデフォルト値)
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// バリデーションは呼び出し側で CLI の上書きを適用した後に行う。
pub fn load_settings(explicit_path: Option<&Path>) -> Result<CompareSettings, ConfigError> {
    if let Some(path) = explicit_path {
        return load_from_file(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if !default_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", default_path);
        return Ok(CompareSettings::default());
    }

    load_from_file(default_path)
}

/// 単一の設定ファイルを読み込んでパースする
fn load_from_file(path: &Path) -> Result<CompareSettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let settings: CompareSettings = serde_json::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    tracing::debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}
