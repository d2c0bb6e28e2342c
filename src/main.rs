use tracing_subscriber::EnvFilter;

use fieldmark::batch::run_batch;
use fieldmark::catalogue::Catalogue;
use fieldmark::config;
use fieldmark::expand::expand;
use fieldmark::render::FrameRenderer;
use fieldmark::sink::DirectorySink;

/// Exit codes: 0 clean, 1 when some tasks failed, 2 on a setup defect
/// (catalogue validation, output directory creation).
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!(
        "{} v{} (APP-6E / MIL-STD-2525E symbol batch generation)",
        config::APP_NAME,
        config::APP_VERSION
    );

    let catalogue = match Catalogue::load() {
        Ok(catalogue) => catalogue,
        Err(e) => {
            tracing::error!(error = %e, "catalogue validation failed");
            std::process::exit(2);
        }
    };

    let output_dir = config::output_dir();
    let sink = match DirectorySink::create(&output_dir) {
        Ok(sink) => sink,
        Err(e) => {
            tracing::error!(error = %e, "cannot prepare output directory");
            std::process::exit(2);
        }
    };

    let renderer = FrameRenderer::new();
    let result = run_batch(expand(&catalogue), &renderer, &sink);

    tracing::info!(
        generated = result.generated,
        errors = result.errors,
        fallbacks = result.fallbacks,
        duration_ms = result.duration_ms,
        output_dir = %output_dir.display(),
        "batch complete"
    );

    if result.errors > 0 {
        std::process::exit(1);
    }
}
