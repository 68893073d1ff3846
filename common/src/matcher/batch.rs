//! 一括照合
//!
//! 内部カタログ順に上位K件を展開して連結する。
//! 1件の内部商品の結果は連続し、内部商品は入力順に並ぶ。

use super::Matcher;
use crate::types::{MatchCandidate, MatchResult, ProductRecord};

impl Matcher {
    /// 全内部商品を照合する
    pub fn match_all(
        &self,
        internal: &[ProductRecord],
        external: &[ProductRecord],
        k: usize,
    ) -> Vec<MatchResult> {
        self.match_all_with_progress(internal, external, k, |_, _, _| {})
    }

    /// 全内部商品を照合する（1件処理するたびに `on_record(index, total, record)` を呼ぶ）
    pub fn match_all_with_progress<F>(
        &self,
        internal: &[ProductRecord],
        external: &[ProductRecord],
        k: usize,
        mut on_record: F,
    ) -> Vec<MatchResult>
    where
        F: FnMut(usize, usize, &ProductRecord),
    {
        let prepared = self.prepare(external);
        let total = internal.len();
        let mut results = Vec::with_capacity(total * k.min(external.len()));

        for (index, record) in internal.iter().enumerate() {
            on_record(index, total, record);
            tracing::debug!(index, total, code = %record.code, "照合中");

            let candidates = self.best_matches_prepared(record, &prepared, k);
            results.extend(expand_ranks(record, candidates));
        }

        results
    }

    /// rayon で内部商品ごとに並列照合する
    ///
    /// - 外部カタログと同義語テーブルは読み取り専用で共有
    /// - 出力は完了順に関係なく内部カタログ順（インデックス付きの collect は順序を保つ）
    /// - `cancel` が立った後は新しい内部商品を開始しない。開始済みの分は順序を保って返す
    /// - `on_done` は1件完了するごとに任意のスレッドから呼ばれる
    #[cfg(feature = "parallel")]
    pub fn match_all_parallel<F>(
        &self,
        internal: &[ProductRecord],
        external: &[ProductRecord],
        k: usize,
        cancel: Option<&std::sync::atomic::AtomicBool>,
        on_done: F,
    ) -> Vec<MatchResult>
    where
        F: Fn(&ProductRecord) + Sync,
    {
        use rayon::prelude::*;
        use std::sync::atomic::Ordering;

        let prepared = self.prepare(external);

        let per_record: Vec<Option<Vec<MatchResult>>> = internal
            .par_iter()
            .map(|record| {
                if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                    return None;
                }
                let candidates = self.best_matches_prepared(record, &prepared, k);
                on_done(record);
                Some(expand_ranks(record, candidates).collect())
            })
            .collect();

        let skipped = per_record.iter().filter(|r| r.is_none()).count();
        if skipped > 0 {
            tracing::warn!(skipped, "キャンセルにより未処理の内部商品があります");
        }

        per_record.into_iter().flatten().flatten().collect()
    }
}

/// 候補に 1..=K の順位を振る
fn expand_ranks<'r>(
    record: &'r ProductRecord,
    candidates: Vec<MatchCandidate>,
) -> impl Iterator<Item = MatchResult> + 'r {
    candidates
        .into_iter()
        .enumerate()
        .map(move |(i, candidate)| MatchResult::from_candidate(record, i + 1, candidate))
}
