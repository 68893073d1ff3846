//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 照合処理そのものは全域関数なので、ここに来るのは同義語テーブルの読み込み・コンパイル失敗のみ。
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid synonym entry: {0}")]
    InvalidSynonym(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
