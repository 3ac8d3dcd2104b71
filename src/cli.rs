//! コマンドライン引数と実行フロー

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::arb::load_arb_file;
use crate::config::{
    self,
    CompareSettings,
    ConfigError,
};
use crate::diff::{
    KeyDiff,
    compare,
};
use crate::error::AppError;
use crate::filter::KeyFilter;
use crate::report::{
    section_labels,
    write_report,
};

#[derive(Debug, Parser)]
#[command(
    name = "arb-compare",
    about = "Report translation keys missing between two ARB files",
    version
)]
pub struct Cli {
    /// Reference ARB file (e.g. `lib/l10n/app_en.arb`).
    #[arg(value_name = "BASE", env = "ARB_COMPARE_BASE")]
    pub base: PathBuf,

    /// ARB file to check against the reference (e.g. `lib/l10n/app_ar.arb`).
    #[arg(value_name = "TARGET", env = "ARB_COMPARE_TARGET")]
    pub target: PathBuf,

    /// Settings file. Defaults to `.arb-compare.json` in the current directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prefix marking metadata keys. Overrides the settings file.
    #[arg(long, value_name = "PREFIX")]
    pub metadata_prefix: Option<String>,

    /// Glob for keys to leave out of the comparison. Can be repeated.
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,
}

impl Cli {
    /// 設定ファイルを読み込み、コマンドライン引数で上書きしてバリデーションする
    pub fn settings(&self) -> Result<CompareSettings, ConfigError> {
        let mut settings = config::load_settings(self.config.as_deref())?;

        if let Some(prefix) = &self.metadata_prefix {
            settings.metadata_prefix.clone_from(prefix);
        }
        settings.ignore_keys.extend(self.ignore.iter().cloned());

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(settings)
    }
}

/// 2 つの ARB ファイルを比較してレポートを `out` に書き出す
///
/// base の読み込みに失敗した場合 target は読み込まない。
/// どちらかの読み込みに失敗した場合は比較を行わない。
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<KeyDiff, AppError> {
    let settings = cli.settings()?;
    let filter = KeyFilter::from_settings(&settings)?;

    let base = load_arb_file(&cli.base)?;
    let target = load_arb_file(&cli.target)?;

    let diff = compare(&base, &target, &filter);
    write_report(out, &base, &target, &diff)?;

    let (base_label, target_label) = section_labels(&base, &target);
    tracing::info!(
        "{} key(s) missing in {target_label}, {} key(s) missing in {base_label}",
        diff.missing_in_target.len(),
        diff.missing_in_base.len()
    );

    Ok(diff)
}
