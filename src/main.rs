use anyhow::Context;
use catalog_match::cli::{Cli, Commands};
use catalog_match::config::Config;
use catalog_match::pipeline::{self, RunOptions};
use catalog_match::{demo, export, loader, logging, report};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load().context("falha ao carregar a configuração")?;

    match cli.command {
        Commands::Run { internal, external, output, format, top_k, synonyms, threads, summary, no_report } => {
            // 1. 読み込み・検証
            println!("ETAPA 1: CARREGANDO DADOS");
            println!("{}", "-".repeat(30));
            let (internal_catalog, external_catalog) = loader::load_catalogs(&internal, &external)
                .with_context(|| {
                    format!(
                        "certifique-se de que os arquivos existem e estão no formato correto: {} / {}",
                        internal.display(),
                        external.display()
                    )
                })?;
            println!("Arquivo interno carregado: {} produtos", internal_catalog.len());
            println!("Arquivo externo carregado: {} produtos", external_catalog.len());
            println!("Estrutura dos arquivos validada com sucesso");

            // 2. 照合
            println!("\n🔄 ETAPA 2: PROCESSANDO PRODUTOS");
            println!("{}", "-".repeat(30));
            let synonyms_file = synonyms.or_else(|| config.synonyms_file.clone());
            let matcher = pipeline::build_matcher(synonyms_file.as_deref())
                .context("falha ao montar a tabela de sinônimos")?;
            let options = RunOptions {
                top_k: top_k.unwrap_or(config.top_k),
                threads: threads.or(config.threads),
                show_progress: !cli.quiet,
            };
            let results = pipeline::run_matching(&matcher, &internal_catalog, &external_catalog, &options)?;

            if results.is_empty() {
                println!("Nenhum resultado gerado. Encerrando programa.");
                return Ok(());
            }
            println!("✔ {} correspondências geradas", results.len());

            // 3. 保存・レポート
            println!("\nETAPA 3: SALVANDO RESULTADOS");
            println!("{}", "-".repeat(30));
            let output = output.unwrap_or_else(|| config.output_file.clone());
            export::export_results(&results, &format, &output)
                .with_context(|| format!("falha ao salvar resultados em {}", output.display()))?;

            if !no_report {
                report::print_report(&results);
                report::print_best_examples(&results, 5);
                report::print_problematic_cases(&results, 3);
            }

            if let Some(summary_data) = report::MatchSummary::from_results(&results) {
                let summary_file = summary.unwrap_or_else(|| config.summary_file.clone());
                report::export_summary(&summary_data, &summary_file)
                    .with_context(|| format!("falha ao salvar relatório em {}", summary_file.display()))?;
            }

            println!("\nPROCESSAMENTO CONCLUÍDO COM SUCESSO!");
        }

        Commands::Demo => {
            let matcher = pipeline::build_matcher(config.synonyms_file.as_deref())?;
            demo::run_demo(&matcher);
        }

        Commands::Normalize { texts, synonyms } => {
            let matcher = pipeline::build_matcher(synonyms.or(config.synonyms_file).as_deref())?;
            for text in &texts {
                println!("{} → {}", text, matcher.normalize(text.as_str()));
            }
        }

        Commands::Score { a, b, synonyms } => {
            let matcher = pipeline::build_matcher(synonyms.or(config.synonyms_file).as_deref())?;
            println!("A: {}", matcher.normalize(a.as_str()));
            println!("B: {}", matcher.normalize(b.as_str()));
            println!("Score: {:.4}", matcher.similarity_score(&a, &b));
        }

        Commands::Config { set_top_k, set_synonyms, show } => {
            let mut config = config;

            if let Some(top_k) = set_top_k {
                config.set_top_k(top_k)?;
                println!("✔ top_k = {}", top_k);
            }

            if let Some(path) = set_synonyms {
                config.set_synonyms_file(path)?;
                println!("✔ arquivo de sinônimos configurado");
            }

            if show {
                println!("Configuração:");
                println!("  top_k: {}", config.top_k);
                println!("  Arquivo de saída: {}", config.output_file.display());
                println!("  Relatório resumo: {}", config.summary_file.display());
                println!(
                    "  Sinônimos: {}",
                    config
                        .synonyms_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(tabela embutida)".to_string())
                );
                println!(
                    "  Threads: {}",
                    config.threads.map(|t| t.to_string()).unwrap_or_else(|| "auto".to_string())
                );
            }
        }
    }

    Ok(())
}
