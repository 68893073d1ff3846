//! 類似度スコア
//!
//! `1 - 距離 / 長い方の文字数`。距離は長い方の文字数を超えないので 0.0〜1.0 に収まる。

use crate::distance::levenshtein_distance;
use crate::normalizer::normalize;

/// 正規化済みの2文字列から類似度を計算
///
/// 両方空なら 1.0（自明な完全一致）。
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}

/// 生の説明文から類似度を計算（組み込みテーブルで正規化してから比較）
pub fn similarity_score(a: &str, b: &str) -> f64 {
    normalized_similarity(&normalize(a), &normalize(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_one() {
        assert_eq!(similarity_score("ARROZ BRANCO TIOJOAO 5KG", "ARROZ BRANCO TIOJOAO 5KG"), 1.0);
        assert_eq!(similarity_score("", ""), 1.0);
        // 正規化後に一致すれば 1.0
        assert_eq!(similarity_score("Caixa", "CX"), 1.0);
        assert_eq!(similarity_score("!!!", "   "), 1.0);
    }

    #[test]
    fn test_empty_vs_non_empty_is_zero() {
        assert_eq!(similarity_score("", "abc"), 0.0);
        assert_eq!(normalized_similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_similarity() {
        assert!((normalized_similarity("abc", "abd") - 2.0 / 3.0).abs() < 1e-12);
        assert!((normalized_similarity("cafe", "cafes") - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_scenario_scores() {
        let milk = similarity_score(
            "LEITE INTEGRAL NESTLE 1L CAIXA",
            "LEITE UHT INTEGRAL NESTLE 1000ML TETRA PAK",
        );
        let chocolate = similarity_score("LEITE INTEGRAL NESTLE 1L CAIXA", "CHOCOLATE NESCAU 400G LATA");

        assert!((milk - 27.0 / 42.0).abs() < 1e-12);
        assert!((chocolate - 8.0 / 30.0).abs() < 1e-12);
        assert!(milk > chocolate + 0.3);
    }
}
