//! 照合結果の集計
//!
//! 順位1の結果（各内部商品の最良候補）だけを対象に平均スコアと品質分布を出す。

mod console;
mod summary;

pub use console::{print_best_examples, print_problematic_cases, print_report};
pub use summary::export_summary;

use catalog_match_common::MatchResult;
use std::collections::HashSet;

/// 高類似度のしきい値
pub const HIGH_QUALITY_THRESHOLD: f64 = 0.8;
/// 中類似度のしきい値
pub const MEDIUM_QUALITY_THRESHOLD: f64 = 0.6;

/// 集計結果
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    /// 結果行の総数（比較件数）
    pub total_comparisons: usize,
    /// 内部商品の種類数
    pub unique_products: usize,
    /// 順位1の件数
    pub best_matches: usize,
    /// 順位1の平均スコア
    pub average_score: f64,
    /// スコア >= 0.80
    pub high_quality: usize,
    /// スコア >= 0.60（高類似度を含む）
    pub medium_quality: usize,
    /// スコア < 0.60
    pub low_quality: usize,
}

impl MatchSummary {
    /// 結果が空なら None
    pub fn from_results(results: &[MatchResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let unique_products = results
            .iter()
            .map(|r| r.internal_code.as_str())
            .collect::<HashSet<_>>()
            .len();

        let best: Vec<f64> = best_match_rows(results).map(|r| r.score).collect();
        let average_score = if best.is_empty() {
            0.0
        } else {
            best.iter().sum::<f64>() / best.len() as f64
        };

        Some(Self {
            total_comparisons: results.len(),
            unique_products,
            best_matches: best.len(),
            average_score,
            high_quality: best.iter().filter(|s| **s >= HIGH_QUALITY_THRESHOLD).count(),
            medium_quality: best.iter().filter(|s| **s >= MEDIUM_QUALITY_THRESHOLD).count(),
            low_quality: best.iter().filter(|s| **s < MEDIUM_QUALITY_THRESHOLD).count(),
        })
    }

    /// best_matches に対する割合（%）
    pub fn percentage(&self, count: usize) -> f64 {
        if self.best_matches == 0 {
            0.0
        } else {
            count as f64 / self.best_matches as f64 * 100.0
        }
    }
}

fn best_match_rows(results: &[MatchResult]) -> impl Iterator<Item = &MatchResult> {
    results.iter().filter(|r| r.rank == 1)
}

/// 順位1の中でスコアが高い順に n 件
pub fn best_examples(results: &[MatchResult], n: usize) -> Vec<&MatchResult> {
    let mut best: Vec<&MatchResult> = best_match_rows(results).collect();
    best.sort_by(|a, b| b.score.total_cmp(&a.score));
    best.truncate(n);
    best
}

/// 順位1の中でスコアが低い順に n 件
pub fn problematic_cases(results: &[MatchResult], n: usize) -> Vec<&MatchResult> {
    let mut best: Vec<&MatchResult> = best_match_rows(results).collect();
    best.sort_by(|a, b| a.score.total_cmp(&b.score));
    best.truncate(n);
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(internal: &str, rank: usize, score: f64) -> MatchResult {
        MatchResult {
            internal_code: internal.to_string(),
            internal_description: format!("DESC {}", internal),
            rank,
            external_code: format!("E-{}-{}", internal, rank),
            external_description: "EXT".to_string(),
            score,
        }
    }

    fn sample() -> Vec<MatchResult> {
        vec![
            result("1", 1, 0.9),
            result("1", 2, 0.5),
            result("2", 1, 0.8),
            result("3", 1, 0.6),
            result("3", 2, 0.6),
            result("4", 1, 0.3),
        ]
    }

    #[test]
    fn test_summary_empty() {
        assert!(MatchSummary::from_results(&[]).is_none());
    }

    #[test]
    fn test_summary_counts() {
        let summary = MatchSummary::from_results(&sample()).unwrap();
        assert_eq!(summary.total_comparisons, 6);
        assert_eq!(summary.unique_products, 4);
        assert_eq!(summary.best_matches, 4);
        assert!((summary.average_score - 0.65).abs() < 1e-9);
        // しきい値ちょうどは上のバケットに入る
        assert_eq!(summary.high_quality, 2);
        assert_eq!(summary.medium_quality, 3);
        assert_eq!(summary.low_quality, 1);
        assert!((summary.percentage(summary.high_quality) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_best_examples() {
        let results = sample();
        let best = best_examples(&results, 2);
        let codes: Vec<&str> = best.iter().map(|r| r.internal_code.as_str()).collect();
        assert_eq!(codes, vec!["1", "2"]);
    }

    #[test]
    fn test_problematic_cases() {
        let results = sample();
        let worst = problematic_cases(&results, 3);
        let codes: Vec<&str> = worst.iter().map(|r| r.internal_code.as_str()).collect();
        assert_eq!(codes, vec!["4", "3", "2"]);
    }
}
