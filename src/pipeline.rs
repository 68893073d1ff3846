//! 照合パイプライン
//!
//! 同義語テーブルの組み立て → 照合（逐次 or rayon）→ 進捗表示。

use crate::error::Result;
use catalog_match_common::{MatchResult, Matcher, ProductRecord, SynonymTable};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// 照合オプション
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub top_k: usize,
    /// None: rayon既定のスレッド数, Some(1): 逐次処理
    pub threads: Option<usize>,
    pub show_progress: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            top_k: catalog_match_common::DEFAULT_TOP_K,
            threads: None,
            show_progress: true,
        }
    }
}

/// 組み込みテーブル + 任意の追加同義語ファイルで照合器を作る
pub fn build_matcher(synonyms_file: Option<&Path>) -> Result<Matcher> {
    let mut table = SynonymTable::default();

    if let Some(path) = synonyms_file {
        let custom = SynonymTable::from_file(path)?;
        tracing::info!(path = %path.display(), entries = custom.len(), "同義語ファイルを追加");
        table.merge(&custom);
    }

    Ok(Matcher::new(&table)?)
}

fn progress_bar(total: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template(
        "🔍 Processando {pos}/{len} [{bar:40.cyan/blue}] {elapsed_precise} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("=>-");
    bar.set_style(style);
    bar
}

/// 全内部商品を照合する
pub fn run_matching(
    matcher: &Matcher,
    internal: &[ProductRecord],
    external: &[ProductRecord],
    options: &RunOptions,
) -> Result<Vec<MatchResult>> {
    let bar = progress_bar(internal.len(), options.show_progress);

    let results = if options.threads == Some(1) {
        matcher.match_all_with_progress(internal, external, options.top_k, |index, _, record| {
            bar.set_position(index as u64);
            bar.set_message(record.description.clone());
        })
    } else {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = options.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;
        tracing::debug!(threads = pool.current_num_threads(), "並列照合");

        pool.install(|| {
            matcher.match_all_parallel(internal, external, options.top_k, None, |_| bar.inc(1))
        })
    };

    bar.finish_and_clear();
    tracing::info!(
        internal = internal.len(),
        external = external.len(),
        results = results.len(),
        "照合完了"
    );
    Ok(results)
}
