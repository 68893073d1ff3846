//! 説明文の正規化
//!
//! ## 処理順
//! 1. 小文字化
//! 2. NFD分解 + 結合文字の除去（ç → c, ã → a）
//! 3. 同義語置換（前後が語の境界になっている場合のみ）
//! 4. 英数字・`_`・空白以外を空白へ
//! 5. 連続空白の圧縮 + 前後trim
//!
//! 「英数字」は Alphabetic と数字カテゴリ全般（Nd に限らない）。`²` や `½` も語の一部として残る。
//! 数字に密着した単位（`5kg`）は境界がないので置換されない。
//! `5 kg` のように区切られた場合のみ畳み込む。

use crate::error::{Error, Result};
use crate::synonyms::SynonymTable;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

lazy_static::lazy_static! {
    static ref NON_WORD_RE: Regex = Regex::new(r"[^\p{Alphabetic}\p{N}_\s]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref DEFAULT_NORMALIZER: TextNormalizer = TextNormalizer::new(&SynonymTable::default())
        .expect("built-in synonym table must compile");
}

/// 語を構成する文字（`NON_WORD_RE` の補集合から空白を除いたもの）
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// 2文字の間が語の境界か（文字列の端は非語文字として扱う）
fn is_boundary(left: Option<char>, right: Option<char>) -> bool {
    left.is_some_and(is_word_char) != right.is_some_and(is_word_char)
}

/// コンパイル済みの置換規則
#[derive(Debug, Clone)]
struct SynonymRule {
    pattern: Regex,
    canonical: String,
}

impl SynonymRule {
    /// 前後が語の境界になっている出現だけを正規形へ置き換える
    fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut start = 0;

        while let Some(m) = self.pattern.find_at(text, start) {
            let matched = m.as_str();
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();

            if is_boundary(before, matched.chars().next())
                && is_boundary(matched.chars().next_back(), after)
            {
                out.push_str(&text[copied..m.start()]);
                out.push_str(&self.canonical);
                copied = m.end();
                start = m.end();
            } else {
                // 境界が合わなければ1文字進めて探し直す
                start = m.start() + matched.chars().next().map_or(1, char::len_utf8);
            }
        }

        out.push_str(&text[copied..]);
        out
    }
}

/// 同義語テーブルを事前コンパイルした正規化器
///
/// 状態を持たないので、複数スレッドから共有して使える。
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    rules: Vec<SynonymRule>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        DEFAULT_NORMALIZER.clone()
    }
}

impl TextNormalizer {
    /// 正規形が他の規則でさらに書き換えられるテーブルは受け付けない
    /// （正規化結果をもう一度正規化しても変わらないようにするため）。
    pub fn new(table: &SynonymTable) -> Result<Self> {
        let mut rules = Vec::new();
        for (variant, canonical) in table.rules() {
            let pattern = Regex::new(&regex::escape(variant))?;
            rules.push(SynonymRule {
                pattern,
                canonical: canonical.to_string(),
            });
        }
        let normalizer = Self { rules };

        for entry in table.entries() {
            let renormalized = normalizer.normalize(entry.canonical.as_str());
            if renormalized != entry.canonical {
                return Err(Error::InvalidSynonym(format!(
                    "正規形 '{}' が '{}' に書き換えられます",
                    entry.canonical, renormalized
                )));
            }
        }

        Ok(normalizer)
    }

    /// 説明文を比較用の文字列へ正規化する
    ///
    /// `None` は空文字列になる（エラーにはしない）。
    pub fn normalize<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        let Some(text) = text.into() else {
            return String::new();
        };

        let mut result = fold_case_and_accents(text);
        for rule in &self.rules {
            result = rule.apply(&result);
        }
        collapse_symbols(&result)
    }
}

/// 組み込みテーブルで正規化する
pub fn normalize<'a>(text: impl Into<Option<&'a str>>) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

/// 小文字化 + NFD分解して結合文字を落とす
pub(crate) fn fold_case_and_accents(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// 記号を空白にして連続空白を1つにまとめる
pub(crate) fn collapse_symbols(text: &str) -> String {
    let result = NON_WORD_RE.replace_all(text, " ");
    let result = WHITESPACE_RE.replace_all(&result, " ");
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonyms::SynonymEntry;

    #[test]
    fn test_normalize_none_is_empty() {
        assert_eq!(normalize(None::<&str>), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_lowercase_and_accents() {
        assert_eq!(normalize("AÇÚCAR Cristal"), "acucar cristal");
        assert_eq!(normalize("Sabão em Pó"), "sabao em po");
        assert_eq!(normalize("maçã"), "maca");
    }

    #[test]
    fn test_synonym_whole_token_only() {
        assert_eq!(normalize("500 kg"), "500 quilograma");
        assert_eq!(normalize("500 g"), "500 grama");
        assert_eq!(normalize("Açúcar Cristal 5 kg"), "acucar cristal 5 quilograma");
        // 数字に密着した単位は境界がないので置換されない
        assert_eq!(normalize("500g"), "500g");
        assert_eq!(normalize("5kg"), "5kg");
        assert_ne!(normalize("500g"), "500 quilograma");
        // 単語の一部も置換しない
        assert_eq!(normalize("leite"), "leite");
    }

    #[test]
    fn test_synonym_with_punctuation_boundary() {
        assert_eq!(normalize("leite int. 1 l"), "leite integral 1 litro");
        assert_eq!(normalize("pct/cx"), "pacote caixa");
        assert_eq!(normalize("Sabão em Pó 1 kilo CX"), "sabao em po 1 quilograma caixa");
    }

    #[test]
    fn test_underscore_is_word_character() {
        // '_' は \w なので境界にならず、記号除去でも残る
        assert_eq!(normalize("x_kg"), "x_kg");
    }

    #[test]
    fn test_table_order_shadows_later_rule() {
        // lt は litro が先に消費する
        assert_eq!(normalize("refri 2 lt pet"), "refri 2 litro garrafa");
    }

    #[test]
    fn test_later_rule_shadowed_by_custom_order() {
        // 同じ表記ゆれは先に並んだ規則が消費する
        let table = SynonymTable::from_entries(vec![
            SynonymEntry::new("sache", &["sc"]),
            SynonymEntry::new("saco", &["sc"]),
        ])
        .unwrap();
        let normalizer = TextNormalizer::new(&table).unwrap();
        assert_eq!(normalizer.normalize("acucar sc 1 kg"), "acucar sache 1 kg");
    }

    #[test]
    fn test_chained_canonical_is_rejected() {
        // b の正規形が後ろの規則でさらに c へ書き換わる
        let table = SynonymTable::from_entries(vec![
            SynonymEntry::new("b", &["a"]),
            SynonymEntry::new("c", &["b"]),
        ])
        .unwrap();
        let err = TextNormalizer::new(&table).unwrap_err();
        assert!(matches!(err, Error::InvalidSynonym(_)));

        // 組み込みの variant と同じ正規形も同様
        let mut merged = SynonymTable::default();
        merged.merge(&SynonymTable::from_entries(vec![SynonymEntry::new("kg", &["quilos"])]).unwrap());
        assert!(TextNormalizer::new(&merged).is_err());
    }

    #[test]
    fn test_custom_table_is_idempotent() {
        let mut table = SynonymTable::default();
        table.merge(&SynonymTable::from_entries(vec![SynonymEntry::new("caixa", &["cxa"])]).unwrap());
        let normalizer = TextNormalizer::new(&table).unwrap();

        let once = normalizer.normalize("LEITE CXA");
        assert_eq!(once, "leite caixa");
        assert_eq!(normalizer.normalize(once.as_str()), once);
    }

    #[test]
    fn test_other_numeric_characters_are_kept() {
        assert_eq!(normalize("PISO CERAMICO 1 M²"), "piso ceramico 1 m²");
        assert_eq!(normalize("PISO 3 M³"), "piso 3 m³");
        assert_eq!(normalize("QUEIJO ½ KG"), "queijo ½ quilograma");
        // ² は語の一部なので kg の後ろに境界はない
        assert_eq!(normalize("x kg²"), "x kg²");
        assert_eq!(normalize("x ²kg"), "x ²kg");
    }

    #[test]
    fn test_repeated_and_adjacent_variants() {
        assert_eq!(normalize("kg kg"), "quilograma quilograma");
        assert_eq!(normalize("cx,cx"), "caixa caixa");
        assert_eq!(normalize("kgkg kg"), "kgkg quilograma");
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(normalize("  CAFÉ-PILÃO,  500G!! (vácuo) "), "cafe pilao 500g vacuo");
        assert_eq!(normalize("a\t\tb\nc"), "a b c");
    }

    #[test]
    fn test_scenario_descriptions() {
        assert_eq!(normalize("LEITE INTEGRAL NESTLE 1L CAIXA"), "leite integral nestle 1l caixa");
        assert_eq!(
            normalize("LEITE UHT INTEGRAL NESTLE 1000ML TETRA PAK"),
            "leite uht integral nestle 1000ml tetra pak"
        );
        assert_eq!(normalize("CHOCOLATE NESCAU 400G LATA"), "chocolate nescau 400g lata");
    }

    #[test]
    fn test_idempotent() {
        for text in [
            "LEITE INTEGRAL NESTLE 1L CAIXA",
            "Sabão em Pó 1 kilo CX",
            "refri 2 lt pet",
            "pct/cx",
            "x_kg",
            "",
        ] {
            let once = normalize(text);
            assert_eq!(normalize(once.as_str()), once, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn test_empty_table() {
        let normalizer = TextNormalizer::new(&SynonymTable::empty()).unwrap();
        assert_eq!(normalizer.normalize("5 KG"), "5 kg");
    }
}
