//! 照合で使う型定義
//!
//! - ProductRecord: 内部/外部カタログの1行
//! - MatchCandidate: 1組(内部, 外部)の採点結果（一時的）
//! - MatchResult: 最終出力の1行（順位付き）

use serde::{Deserialize, Serialize};

/// カタログの1行（商品コード + 説明文）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    pub description: String,
}

impl ProductRecord {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// 外部カタログ1件に対する採点結果
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub external_code: String,
    pub external_description: String,
    /// 0.0〜1.0（丸め前）
    pub score: f64,
}

/// 照合結果の1行
///
/// 列名は既存の帳票（CSV）と互換にしてある。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "CODIGO_INTERNO")]
    pub internal_code: String,

    #[serde(rename = "DESCRICAO_INTERNA")]
    pub internal_description: String,

    /// 1始まりの順位
    #[serde(rename = "RANKING")]
    pub rank: usize,

    #[serde(rename = "CODIGO_EXTERNO")]
    pub external_code: String,

    #[serde(rename = "DESCRICAO_EXTERNA")]
    pub external_description: String,

    /// 小数点以下4桁に丸めたスコア
    #[serde(rename = "SCORE_SIMILARIDADE")]
    pub score: f64,
}

impl MatchResult {
    /// 候補を順位付きの結果行に展開する
    pub fn from_candidate(internal: &ProductRecord, rank: usize, candidate: MatchCandidate) -> Self {
        Self {
            internal_code: internal.code.clone(),
            internal_description: internal.description.clone(),
            rank,
            external_code: candidate.external_code,
            external_description: candidate.external_description,
            score: round_score(candidate.score),
        }
    }
}

/// スコアを小数点以下4桁に丸める（0.5は0から遠い方へ）
pub fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(0.642857142857), 0.6429);
        assert_eq!(round_score(0.16216216), 0.1622);
        assert_eq!(round_score(1.0), 1.0);
        assert_eq!(round_score(0.0), 0.0);
        // 0.00005 ちょうどは切り上げ側
        assert_eq!(round_score(0.12345), 0.1235);
    }

    #[test]
    fn test_from_candidate() {
        let internal = ProductRecord::new("I1", "LEITE INTEGRAL");
        let candidate = MatchCandidate {
            external_code: "E9".to_string(),
            external_description: "LEITE UHT".to_string(),
            score: 0.666666,
        };

        let result = MatchResult::from_candidate(&internal, 2, candidate);
        assert_eq!(result.internal_code, "I1");
        assert_eq!(result.rank, 2);
        assert_eq!(result.external_code, "E9");
        assert_eq!(result.score, 0.6667);
    }

    #[test]
    fn test_match_result_column_names() {
        let result = MatchResult {
            internal_code: "1".into(),
            internal_description: "a".into(),
            rank: 1,
            external_code: "2".into(),
            external_description: "b".into(),
            score: 0.5,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"CODIGO_INTERNO\""));
        assert!(json.contains("\"SCORE_SIMILARIDADE\""));
    }
}
