use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogMatchError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Formato de arquivo não suportado: {0} (use .csv, .xlsx, .xls ou .ods)")]
    UnsupportedFormat(String),

    #[error("{file} deve conter as colunas: {}", .columns.join(", "))]
    MissingColumns { file: String, columns: Vec<String> },

    #[error("{file}: linha {row} sem código de produto")]
    InvalidRecord { file: String, row: usize },

    #[error("Planilha vazia: {0}")]
    EmptySheet(String),

    #[error("Erro de CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Erro ao ler planilha: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Erro ao gerar Excel: {0}")]
    ExcelGeneration(#[from] rust_xlsxwriter::XlsxError),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro no núcleo de comparação: {0}")]
    Core(#[from] catalog_match_common::Error),

    #[error("Erro ao criar pool de threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, CatalogMatchError>;
