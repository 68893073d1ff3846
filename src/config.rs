use crate::error::{CatalogMatchError, Result};
use catalog_match_common::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 内部商品1件あたりの候補数
    pub top_k: usize,
    pub output_file: PathBuf,
    pub summary_file: PathBuf,
    /// 組み込みテーブルの後ろに追加する同義語JSON
    pub synonyms_file: Option<PathBuf>,
    /// 並列数（None: rayon既定, 1: 逐次）
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            output_file: PathBuf::from("resultado_classificacao.csv"),
            summary_file: PathBuf::from("relatorio_resumo.txt"),
            synonyms_file: None,
            threads: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            if config.top_k == 0 {
                return Err(CatalogMatchError::Config(format!(
                    "top_k deve ser maior que zero: {}",
                    config_path.display()
                )));
            }
            tracing::debug!(path = %config_path.display(), "設定を読み込みました");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogMatchError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("catalog-match").join("config.json"))
    }

    pub fn set_top_k(&mut self, top_k: usize) -> Result<()> {
        if top_k == 0 {
            return Err(CatalogMatchError::Config("top_k deve ser maior que zero".into()));
        }
        self.top_k = top_k;
        self.save()
    }

    pub fn set_synonyms_file(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(CatalogMatchError::FileNotFound(path.display().to_string()));
        }
        self.synonyms_file = Some(path);
        self.save()
    }
}
