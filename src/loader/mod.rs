//! カタログ読み込み・検証
//!
//! CSV（ヘッダー行あり）または表計算ファイル（先頭シート、1行目がヘッダー）から
//! ProductRecord の列を作る。必須列が欠けたファイルは照合前にここで弾く。

mod spreadsheet;

use crate::error::{CatalogMatchError, Result};
use catalog_match_common::ProductRecord;
use std::path::Path;

const DESCRIPTION_COLUMN: &str = "DESCRICAO";

/// 読み込むカタログの種類（必須列が異なる）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Internal,
    External,
}

impl CatalogKind {
    pub fn code_column(&self) -> &'static str {
        match self {
            CatalogKind::Internal => "CODIGO_INTERNO",
            CatalogKind::External => "CODIGO_EXTERNO",
        }
    }

    pub fn required_columns(&self) -> [&'static str; 2] {
        [self.code_column(), DESCRIPTION_COLUMN]
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Internal => write!(f, "interno"),
            CatalogKind::External => write!(f, "externo"),
        }
    }
}

/// ヘッダー + 文字列セルの表
#[derive(Debug, Clone, Default)]
pub(crate) struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// 対応ファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Csv,
    Spreadsheet,
}

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

fn detect_format(path: &Path) -> Result<SourceFormat> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ext == "csv" {
        Ok(SourceFormat::Csv)
    } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        Ok(SourceFormat::Spreadsheet)
    } else {
        Err(CatalogMatchError::UnsupportedFormat(path.display().to_string()))
    }
}

/// カタログファイルを1つ読み込む
pub fn load_catalog(path: &Path, kind: CatalogKind) -> Result<Vec<ProductRecord>> {
    if !path.exists() {
        return Err(CatalogMatchError::FileNotFound(path.display().to_string()));
    }

    let table = match detect_format(path)? {
        SourceFormat::Csv => read_csv(path)?,
        SourceFormat::Spreadsheet => spreadsheet::read_first_sheet(path)?,
    };

    let records = records_from_table(&table, kind, &path.display().to_string())?;
    tracing::info!(path = %path.display(), kind = %kind, count = records.len(), "カタログ読み込み完了");
    Ok(records)
}

/// 内部・外部カタログをまとめて読み込む
pub fn load_catalogs(
    internal_path: &Path,
    external_path: &Path,
) -> Result<(Vec<ProductRecord>, Vec<ProductRecord>)> {
    let internal = load_catalog(internal_path, CatalogKind::Internal)?;
    let external = load_catalog(external_path, CatalogKind::External)?;
    Ok((internal, external))
}

/// CSVを読み込む（列数の揃っていない行も受け付ける）
fn read_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

fn clean_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_string()
}

/// 表から必須列を取り出して ProductRecord を作る
pub(crate) fn records_from_table(
    table: &RawTable,
    kind: CatalogKind,
    file: &str,
) -> Result<Vec<ProductRecord>> {
    let column_index = |name: &str| table.headers.iter().position(|h| h == name);

    let (Some(code_idx), Some(desc_idx)) =
        (column_index(kind.code_column()), column_index(DESCRIPTION_COLUMN))
    else {
        return Err(CatalogMatchError::MissingColumns {
            file: file.to_string(),
            columns: kind.required_columns().iter().map(|c| c.to_string()).collect(),
        });
    };

    let mut records = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            tracing::warn!(file, row = i + 2, "空行をスキップしました");
            continue;
        }

        let code = row.get(code_idx).map(|c| c.trim()).unwrap_or_default();
        if code.is_empty() {
            // ヘッダーが1行目なのでデータ行は2行目から
            return Err(CatalogMatchError::InvalidRecord {
                file: file.to_string(),
                row: i + 2,
            });
        }

        let description = row.get(desc_idx).cloned().unwrap_or_default();
        records.push(ProductRecord::new(code, description));
    }

    Ok(records)
}
