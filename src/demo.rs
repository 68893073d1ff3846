//! デモモード
//!
//! 組み込みの小さな商品リストで類似度計算の挙動を見せる。

use catalog_match_common::{Matcher, ProductRecord};

pub const DEMO_INTERNAL: [&str; 3] = [
    "LEITE INTEGRAL NESTLE 1L CAIXA",
    "ARROZ BRANCO TIOJOAO 5KG",
    "CAFE PILAO 500G VACUO",
];

pub const DEMO_EXTERNAL: [&str; 4] = [
    "LEITE UHT INTEGRAL NESTLE 1000ML TETRA PAK",
    "ARROZ POLIDO TIO JOAO TIPO 1 SACO 5KG",
    "CAFE TORRADO MOIDO PILAO 500G A VACUO",
    "CHOCOLATE NESCAU 400G LATA",
];

fn demo_records(descriptions: &[&str], prefix: &str) -> Vec<ProductRecord> {
    descriptions
        .iter()
        .enumerate()
        .map(|(i, description)| ProductRecord::new(format!("{}{}", prefix, i + 1), *description))
        .collect()
}

/// 内部商品ごとの最良候補（上位1件）とスコア
///
/// 順位付けは本処理と同じ（同点は先に現れた外部商品）。
pub fn demo_best_matches(matcher: &Matcher) -> Vec<(&'static str, String, f64)> {
    let external = demo_records(&DEMO_EXTERNAL, "E");
    let catalog = matcher.prepare(&external);

    DEMO_INTERNAL
        .iter()
        .zip(demo_records(&DEMO_INTERNAL, "I"))
        .map(|(description, record)| {
            let (best_match, score) = matcher
                .best_matches_prepared(&record, &catalog, 1)
                .into_iter()
                .next()
                .map(|candidate| (candidate.external_description, candidate.score))
                .unwrap_or_default();
            (*description, best_match, score)
        })
        .collect()
}

pub fn run_demo(matcher: &Matcher) {
    println!("MODO DEMONSTRAÇÃO");
    println!("{}", "=".repeat(30));
    println!("Demonstração do algoritmo:\n");

    for (internal, best_match, score) in demo_best_matches(matcher) {
        println!("Produto Interno: {}", internal);
        println!("Melhor Match: {}", best_match);
        println!("Score: {:.4}", score);
        println!("{}", "-".repeat(60));
    }
}
