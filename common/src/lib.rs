//! Catalog Match Common Library
//!
//! 商品カタログ照合のコア（正規化・レーベンシュタイン距離・類似度・上位K件選択）。
//! CLIからも他のフロントエンドからも使えるよう、ファイルI/Oは同義語テーブルの読み込みのみ。

pub mod distance;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod scorer;
pub mod synonyms;
pub mod types;

pub use distance::levenshtein_distance;
pub use error::{Error, Result};
pub use matcher::{Matcher, PreparedCatalog, DEFAULT_TOP_K};
pub use normalizer::{normalize, TextNormalizer};
pub use scorer::{normalized_similarity, similarity_score};
pub use synonyms::{SynonymEntry, SynonymTable};
pub use types::{round_score, MatchCandidate, MatchResult, ProductRecord};
