use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog-match")]
#[command(about = "商品カタログ照合ツール（内部リスト × 外部リストの上位K件マッチング）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 進捗バーを表示しない
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 内部・外部カタログを照合して結果を保存
    Run {
        /// 内部カタログ（CODIGO_INTERNO, DESCRICAO）
        #[arg(required = true)]
        internal: PathBuf,

        /// 外部カタログ（CODIGO_EXTERNO, DESCRICAO）
        #[arg(required = true)]
        external: PathBuf,

        /// 出力ファイル（デフォルト: 設定の output_file）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (csv/excel/both)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// 内部商品1件あたりの候補数（デフォルト: 設定の top_k）
        #[arg(short = 'k', long, value_parser = parse_top_k)]
        top_k: Option<usize>,

        /// 追加の同義語JSONファイル
        #[arg(long)]
        synonyms: Option<PathBuf>,

        /// 並列スレッド数（1で逐次処理）
        #[arg(short, long)]
        threads: Option<usize>,

        /// 集計テキストの出力先（デフォルト: 設定の summary_file）
        #[arg(long)]
        summary: Option<PathBuf>,

        /// コンソールレポートを省略
        #[arg(long)]
        no_report: bool,
    },

    /// 組み込みサンプルでデモ実行
    Demo,

    /// 説明文の正規化結果を表示
    Normalize {
        #[arg(required = true)]
        texts: Vec<String>,

        /// 追加の同義語JSONファイル
        #[arg(long)]
        synonyms: Option<PathBuf>,
    },

    /// 2つの説明文の類似度を表示
    Score {
        #[arg(required = true)]
        a: String,

        #[arg(required = true)]
        b: String,

        /// 追加の同義語JSONファイル
        #[arg(long)]
        synonyms: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の候補数を設定
        #[arg(long, value_parser = parse_top_k)]
        set_top_k: Option<usize>,

        /// 既定の同義語ファイルを設定
        #[arg(long)]
        set_synonyms: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 候補数は1以上
fn parse_top_k(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("top_k deve ser maior que zero".to_string()),
        Ok(k) => Ok(k),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
