//! コンソール向けレポート表示

use super::{best_examples, problematic_cases, MatchSummary};
use catalog_match_common::MatchResult;

pub fn print_report(results: &[MatchResult]) {
    let Some(summary) = MatchSummary::from_results(results) else {
        println!("Nenhum resultado para analisar");
        return;
    };

    println!("\n{}", "=".repeat(60));
    println!("RELATÓRIO DE ANÁLISE");
    println!("{}", "=".repeat(60));

    println!("Total de comparações: {}", summary.total_comparisons);
    println!("Produtos processados: {}", summary.unique_products);
    println!("Score médio dos melhores matches: {:.4}", summary.average_score);

    println!("\nDistribuição de Qualidade (Melhores Matches):");
    println!(
        "Alta similaridade (≥80%): {} produtos ({:.1}%)",
        summary.high_quality,
        summary.percentage(summary.high_quality)
    );
    println!(
        "Média similaridade (≥60%): {} produtos ({:.1}%)",
        summary.medium_quality,
        summary.percentage(summary.medium_quality)
    );
    println!(
        "Baixa similaridade (<60%): {} produtos ({:.1}%)",
        summary.low_quality,
        summary.percentage(summary.low_quality)
    );
}

pub fn print_best_examples(results: &[MatchResult], top_n: usize) {
    println!("\nTOP {} MELHORES CORRESPONDÊNCIAS:", top_n);
    println!("{}", "=".repeat(80));

    for row in best_examples(results, top_n) {
        println!("\nScore: {:.4}", row.score);
        println!("Interno:  {}", row.internal_description);
        println!("Externo:  {}", row.external_description);
        println!("{}", "-".repeat(80));
    }
}

pub fn print_problematic_cases(results: &[MatchResult], bottom_n: usize) {
    println!("\n{} CASOS MAIS PROBLEMÁTICOS:", bottom_n);
    println!("{}", "=".repeat(80));

    for row in problematic_cases(results, bottom_n) {
        println!("\nScore: {:.4}", row.score);
        println!("Interno:  {}", row.internal_description);
        println!("Melhor Match: {}", row.external_description);
        println!("{}", "-".repeat(80));
    }
}
