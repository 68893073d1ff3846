//! 同義語テーブル
//!
//! 単位・包装の略記（kg, cx, pct ...）を正規形へ畳み込むための表。
//! 置換は表の並び順に1語ずつ適用されるため、順序そのものが結果に影響する。
//! 例えば `lt` は先に `litro` 側で消費されるので、`lata ← lt` は実質的に効かない。

use crate::error::{Error, Result};
use crate::normalizer::{collapse_symbols, fold_case_and_accents};
use serde::{Deserialize, Serialize};

/// 正規形1つと、それに畳み込まれる表記ゆれの一覧
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub canonical: String,
    pub variants: Vec<String>,
}

impl SynonymEntry {
    pub fn new(canonical: &str, variants: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// 順序付きの同義語テーブル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl Default for SynonymTable {
    /// 組み込みテーブル
    fn default() -> Self {
        Self {
            entries: vec![
                SynonymEntry::new("quilograma", &["kg", "kilo"]),
                SynonymEntry::new("grama", &["g", "gr"]),
                SynonymEntry::new("mililitro", &["ml"]),
                SynonymEntry::new("litro", &["l", "lt"]),
                SynonymEntry::new("pacote", &["pct", "pack"]),
                SynonymEntry::new("caixa", &["cx"]),
                SynonymEntry::new("garrafa", &["gar", "pet"]),
                SynonymEntry::new("lata", &["lt"]),
                SynonymEntry::new("unidade", &["un", "und"]),
                SynonymEntry::new("integral", &["int"]),
                SynonymEntry::new("natural", &["nat"]),
            ],
        }
    }
}

impl SynonymTable {
    /// 空のテーブル（置換なし）
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn from_entries(entries: Vec<SynonymEntry>) -> Result<Self> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// JSON文字列から読み込み
    ///
    /// 形式: `[{"canonical": "caixa", "variants": ["cx", "cxa"]}, ...]`
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<SynonymEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 後ろに追加する（追加分は既存の規則の後に適用される）
    pub fn merge(&mut self, other: &SynonymTable) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (表記ゆれ, 正規形) の組を適用順に列挙
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .variants
                .iter()
                .map(move |variant| (variant.as_str(), entry.canonical.as_str()))
        })
    }

    /// 正規形は正規化済みの形（小文字・アクセントなし・記号なし）でなければならない。
    /// 表記ゆれは小文字・アクセントなしで書く（照合前に入力側が小文字化されるため）。
    fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            if entry.canonical.trim().is_empty() {
                return Err(Error::InvalidSynonym("canonical が空です".to_string()));
            }
            if collapse_symbols(&fold_case_and_accents(&entry.canonical)) != entry.canonical {
                return Err(Error::InvalidSynonym(format!(
                    "正規形 '{}' は小文字・アクセントなし・記号なしで指定してください",
                    entry.canonical
                )));
            }
            for variant in &entry.variants {
                if variant.trim().is_empty() {
                    return Err(Error::InvalidSynonym(format!(
                        "'{}' に空の variant があります",
                        entry.canonical
                    )));
                }
                if fold_case_and_accents(variant) != *variant {
                    return Err(Error::InvalidSynonym(format!(
                        "variant '{}' は小文字・アクセントなしで指定してください",
                        variant
                    )));
                }
            }
        }
        Ok(())
    }
}
