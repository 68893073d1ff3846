//! ログ初期化
//!
//! 利用者向けの進行表示・レポートは println! で出し、診断ログは tracing で stderr に出す。

use tracing_subscriber::EnvFilter;

/// RUST_LOG を優先し、未設定なら verbose で debug、通常は warn
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // テストなどで二重初期化された場合は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
