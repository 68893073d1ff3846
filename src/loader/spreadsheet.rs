//! 表計算ファイル（xlsx/xls/ods）の読み込み

use super::{clean_header, RawTable};
use crate::error::{CatalogMatchError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 先頭シートを読み込む（1行目がヘッダー）
pub(crate) fn read_first_sheet(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CatalogMatchError::EmptySheet(path.display().to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| clean_header(&cell_to_string(cell)))
            .collect(),
        None => return Err(CatalogMatchError::EmptySheet(path.display().to_string())),
    };

    let rows: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

/// セルを文字列化する
///
/// 商品コードが数値セルで保存されていることが多いので、整数値の浮動小数は "123.0" ではなく "123" にする。
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
