//! arb-compare
//!
//! 2 つの ARB ファイルを比較し、片方にしか存在しない翻訳キーを報告する

pub mod arb;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod filter;
pub mod report;

pub use cli::{
    Cli,
    run,
};
pub use error::AppError;
