//! カタログ照合
//!
//! 内部カタログの各商品について、外部カタログ全件と類似度を計算し上位K件を選ぶ。
//!
//! ## 処理フロー
//! 1. 外部カタログの説明文を1回だけ正規化（PreparedCatalog）
//! 2. 内部商品ごとに全件採点 → 安定ソート → 上位K件（ranker）
//! 3. 内部カタログ順に結果を連結（batch）

mod batch;
mod ranker;

use crate::error::Result;
use crate::normalizer::TextNormalizer;
use crate::scorer::normalized_similarity;
use crate::synonyms::SynonymTable;
use crate::types::ProductRecord;

/// 既定の候補数
pub const DEFAULT_TOP_K: usize = 3;

/// 照合器
///
/// 正規化器（コンパイル済み同義語テーブル）だけを持ち、照合中に書き換えられる状態はない。
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    normalizer: TextNormalizer,
}

/// 正規化済みの外部カタログ
///
/// 元のレコード順をそのまま保持する（同点時の順位付けに使う）。
#[derive(Debug, Clone)]
pub struct PreparedCatalog<'a> {
    records: &'a [ProductRecord],
    normalized: Vec<String>,
}

impl<'a> PreparedCatalog<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&'a ProductRecord, &str)> + '_ {
        self.records
            .iter()
            .zip(self.normalized.iter().map(|s| s.as_str()))
    }
}

impl Matcher {
    pub fn new(table: &SynonymTable) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new(table)?,
        })
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn normalize<'t>(&self, text: impl Into<Option<&'t str>>) -> String {
        self.normalizer.normalize(text)
    }

    /// 生の説明文2つの類似度
    pub fn similarity_score(&self, a: &str, b: &str) -> f64 {
        normalized_similarity(&self.normalize(a), &self.normalize(b))
    }

    /// 外部カタログを正規化しておく
    ///
    /// 正規化は純粋関数なので、毎回計算し直した場合と結果は同一。
    pub fn prepare<'a>(&self, catalog: &'a [ProductRecord]) -> PreparedCatalog<'a> {
        let normalized = catalog
            .iter()
            .map(|record| self.normalize(record.description.as_str()))
            .collect();
        PreparedCatalog {
            records: catalog,
            normalized,
        }
    }
}
