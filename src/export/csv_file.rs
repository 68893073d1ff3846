//! CSV出力

use super::{ensure_parent_dir, RESULT_COLUMNS};
use crate::error::Result;
use catalog_match_common::MatchResult;
use std::path::Path;

/// 照合結果をUTF-8のCSVで保存する
///
/// 結果が0件でもヘッダー行だけは書く。
pub fn save_csv(results: &[MatchResult], output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;

    writer.write_record(RESULT_COLUMNS)?;
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;

    tracing::debug!(path = %output_path.display(), rows = results.len(), "CSV出力");
    Ok(())
}

/// CSVで保存した照合結果を読み戻す
pub fn read_csv(path: &Path) -> Result<Vec<MatchResult>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut results = Vec::new();
    for record in reader.deserialize() {
        results.push(record?);
    }
    Ok(results)
}
