//! 上位K件の選択

use super::{Matcher, PreparedCatalog};
use crate::scorer::normalized_similarity;
use crate::types::{MatchCandidate, ProductRecord};

impl Matcher {
    /// 内部商品1件に対して外部カタログの上位K件を返す
    ///
    /// - スコア降順。同点は外部カタログの元の順序を保つ（安定ソート）
    /// - カタログがK件未満なら全件
    /// - 空カタログ、または k == 0 なら空
    pub fn best_matches(
        &self,
        internal: &ProductRecord,
        catalog: &[ProductRecord],
        k: usize,
    ) -> Vec<MatchCandidate> {
        let prepared = self.prepare(catalog);
        self.best_matches_prepared(internal, &prepared, k)
    }

    /// 正規化済みカタログ版
    pub fn best_matches_prepared(
        &self,
        internal: &ProductRecord,
        catalog: &PreparedCatalog<'_>,
        k: usize,
    ) -> Vec<MatchCandidate> {
        let internal_text = self.normalize(internal.description.as_str());
        rank_candidates(&internal_text, catalog, k)
    }
}

fn rank_candidates(internal_text: &str, catalog: &PreparedCatalog<'_>, k: usize) -> Vec<MatchCandidate> {
    if k == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<MatchCandidate> = catalog
        .iter()
        .map(|(record, external_text)| MatchCandidate {
            external_code: record.code.clone(),
            external_description: record.description.clone(),
            score: normalized_similarity(internal_text, external_text),
        })
        .collect();

    // sort_by は安定ソート
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(k);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(descriptions: &[&str]) -> Vec<ProductRecord> {
        descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| ProductRecord::new(format!("E{}", i + 1), *d))
            .collect()
    }

    #[test]
    fn test_best_matches_scenario() {
        let matcher = Matcher::default();
        let internal = ProductRecord::new("I1", "LEITE INTEGRAL NESTLE 1L CAIXA");
        let external = catalog(&[
            "CHOCOLATE NESCAU 400G LATA",
            "LEITE UHT INTEGRAL NESTLE 1000ML TETRA PAK",
        ]);

        let matches = matcher.best_matches(&internal, &external, 1);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].external_code, "E2");
        assert!((matches[0].score - 27.0 / 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_best_matches_sorted_descending() {
        let matcher = Matcher::default();
        let internal = ProductRecord::new("I1", "CAFE PILAO 500G VACUO");
        let external = catalog(&[
            "LEITE UHT INTEGRAL NESTLE 1000ML TETRA PAK",
            "ARROZ POLIDO TIO JOAO TIPO 1 SACO 5KG",
            "CAFE TORRADO MOIDO PILAO 500G A VACUO",
            "CHOCOLATE NESCAU 400G LATA",
        ]);

        let matches = matcher.best_matches(&internal, &external, 3);
        let codes: Vec<&str> = matches.iter().map(|m| m.external_code.as_str()).collect();
        assert_eq!(codes, vec!["E3", "E4", "E2"]);
        assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let matcher = Matcher::default();
        let internal = ProductRecord::new("I1", "abc");
        // abd / xbc / abx はすべて距離1
        let external = catalog(&["zzz", "abd", "xbc", "abx"]);

        let matches = matcher.best_matches(&internal, &external, 3);
        let codes: Vec<&str> = matches.iter().map(|m| m.external_code.as_str()).collect();
        assert_eq!(codes, vec!["E2", "E3", "E4"]);
    }

    #[test]
    fn test_fewer_than_k() {
        let matcher = Matcher::default();
        let internal = ProductRecord::new("I1", "abc");
        let external = catalog(&["abc", "def"]);

        assert_eq!(matcher.best_matches(&internal, &external, 3).len(), 2);
    }

    #[test]
    fn test_empty_catalog_and_zero_k() {
        let matcher = Matcher::default();
        let internal = ProductRecord::new("I1", "abc");

        assert!(matcher.best_matches(&internal, &[], 3).is_empty());
        assert!(matcher.best_matches(&internal, &catalog(&["abc"]), 0).is_empty());
    }

    #[test]
    fn test_keeps_original_description() {
        let matcher = Matcher::default();
        let internal = ProductRecord::new("I1", "arroz 5 kg");
        let external = catalog(&["Arroz 5 KG"]);

        let matches = matcher.best_matches(&internal, &external, 1);
        assert_eq!(matches[0].external_description, "Arroz 5 KG");
        assert_eq!(matches[0].score, 1.0);
    }
}
