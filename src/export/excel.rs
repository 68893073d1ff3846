//! Excel出力（rust_xlsxwriter）

use super::{ensure_parent_dir, RESULT_COLUMNS};
use crate::error::Result;
use catalog_match_common::MatchResult;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "Resultados";

/// 列幅（文字数）
const COLUMN_WIDTHS: [f64; 6] = [16.0, 50.0, 10.0, 16.0, 50.0, 20.0];

pub fn save_excel(results: &[MatchResult], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    let score_format = Format::new().set_num_format("0.0000");

    for (col, (title, width)) in RESULT_COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &header_format)?;
        worksheet.set_column_width(col, width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (i, result) in results.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &result.internal_code)?;
        worksheet.write_string(row, 1, &result.internal_description)?;
        worksheet.write_number(row, 2, result.rank as f64)?;
        worksheet.write_string(row, 3, &result.external_code)?;
        worksheet.write_string(row, 4, &result.external_description)?;
        worksheet.write_number_with_format(row, 5, result.score, &score_format)?;
    }

    ensure_parent_dir(output_path)?;
    workbook.save(output_path)?;
    tracing::debug!(path = %output_path.display(), rows = results.len(), "Excel出力");
    Ok(())
}
