pub mod csv_file;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use catalog_match_common::MatchResult;
use std::path::{Path, PathBuf};

/// 出力ファイルの列見出し（既存の帳票と同じ並び）
pub const RESULT_COLUMNS: [&str; 6] = [
    "CODIGO_INTERNO",
    "DESCRICAO_INTERNA",
    "RANKING",
    "CODIGO_EXTERNO",
    "DESCRICAO_EXTERNA",
    "SCORE_SIMILARIDADE",
];

const DEFAULT_STEM: &str = "resultado_classificacao";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() {
        output.join(format!("{}.{}", DEFAULT_STEM, extension))
    } else {
        output.with_extension(extension)
    }
}

/// 出力先の親ディレクトリがなければ作る
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// 照合結果を指定形式で保存し、書き出したパスを返す
pub fn export_results(
    results: &[MatchResult],
    format: &ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Csv | ExportFormat::Both) {
        let path = output_path_for_format(output, "csv");
        csv_file::save_csv(results, &path)?;
        println!("Resultados salvos em: {}", path.display());
        written.push(path);
    }

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let path = output_path_for_format(output, "xlsx");
        excel::save_excel(results, &path)?;
        println!("Resultados salvos em: {}", path.display());
        written.push(path);
    }

    Ok(written)
}
