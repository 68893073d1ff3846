//! 商品カタログ照合ツール
//!
//! 照合コアは `catalog_match_common`。ここではカタログ読み込み・結果出力・レポート・CLIを扱う。

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod report;
