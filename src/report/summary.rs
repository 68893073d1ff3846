//! 集計のテキストファイル出力

use super::MatchSummary;
use crate::error::Result;
use std::fmt::Write as _;
use std::path::Path;

/// 集計をテキストにする（生成日時つき）
pub fn render_summary(summary: &MatchSummary, generated_at: &str) -> String {
    let mut text = String::new();

    // String への書き込みは失敗しない
    let _ = writeln!(text, "RELATÓRIO DE CLASSIFICAÇÃO DE PRODUTOS");
    let _ = writeln!(text, "{}", "=".repeat(50));
    let _ = writeln!(text, "Gerado em: {}\n", generated_at);

    let _ = writeln!(text, "Total de produtos processados: {}", summary.best_matches);
    let _ = writeln!(text, "Score médio de similaridade: {:.4}\n", summary.average_score);

    let _ = writeln!(text, "DISTRIBUIÇÃO DE QUALIDADE:");
    let _ = writeln!(text, "Alta similaridade (≥80%): {} produtos", summary.high_quality);
    let _ = writeln!(text, "Média similaridade (≥60%): {} produtos", summary.medium_quality);
    let _ = writeln!(text, "Baixa similaridade (<60%): {} produtos", summary.low_quality);

    text
}

pub fn export_summary(summary: &MatchSummary, summary_file: &Path) -> Result<()> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    std::fs::write(summary_file, render_summary(summary, &generated_at))?;
    println!("📄 Relatório resumo salvo em: {}", summary_file.display());
    Ok(())
}
