//! Sequential task loop with per-task failure isolation.

use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use crate::catalogue::{PostProcess, UnitCategory, UnitWeight};
use crate::config;
use crate::expand::GenerationTask;
use crate::render::{RenderError, RenderedSymbol, SymbolRenderer};
use crate::sink::OutputSink;

/// File name of the flat-file index written after the task loop.
pub const MANIFEST_NAME: &str = "manifest.json";

/// Aggregate outcome of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub generated: u32,
    pub errors: u32,
    /// Symbols written with the renderer's placeholder glyph
    /// (unrecognised function id); warnings, not errors.
    pub fallbacks: u32,
    pub duration_ms: u64,
}

#[derive(Debug, Serialize)]
struct ManifestEntry {
    file: String,
    unit_id: &'static str,
    label: &'static str,
    sidc: String,
    affiliation: &'static str,
    confidence: &'static str,
    weight: UnitWeight,
    category: UnitCategory,
    fallback: bool,
}

#[derive(Debug, Serialize)]
struct Manifest {
    tool: &'static str,
    version: &'static str,
    generated_at: String,
    symbols: Vec<ManifestEntry>,
}

/// Drive every task through render → post-process → annotate → write.
///
/// Returns aggregate counts only; per-task outcomes are observable from the
/// log stream. After the loop a `manifest.json` index of everything
/// generated is written through the same sink.
pub fn run_batch<'a>(
    tasks: impl IntoIterator<Item = GenerationTask<'a>>,
    renderer: &dyn SymbolRenderer,
    sink: &dyn OutputSink,
) -> BatchResult {
    let start = Instant::now();
    let mut result = BatchResult::default();
    let mut manifest = Vec::new();

    for task in tasks {
        let file = format!("{}.svg", task.output_name);

        let rendered = match generate_one(&task, renderer) {
            Ok(rendered) => rendered,
            Err(e) => {
                result.errors += 1;
                tracing::error!(file = %file, error = %e, "render failed");
                continue;
            }
        };

        if let Err(e) = sink.write(&file, &rendered.svg) {
            result.errors += 1;
            tracing::error!(file = %file, error = %e, "write failed");
            continue;
        }

        result.generated += 1;
        if rendered.is_fallback {
            result.fallbacks += 1;
            tracing::warn!(
                file = %file,
                sidc = %task.sidc,
                "function id not recognised, wrote placeholder glyph"
            );
        } else {
            tracing::info!(file = %file, "generated");
        }

        manifest.push(ManifestEntry {
            file,
            unit_id: task.unit.id,
            label: task.unit.label,
            sidc: task.sidc.clone(),
            affiliation: task.affiliation.key,
            confidence: task.confidence.key,
            weight: task.unit.weight,
            category: task.unit.category,
            fallback: rendered.is_fallback,
        });
    }

    write_manifest(manifest, sink, &mut result);
    result.duration_ms = start.elapsed().as_millis() as u64;
    result
}

fn generate_one(
    task: &GenerationTask<'_>,
    renderer: &dyn SymbolRenderer,
) -> Result<RenderedSymbol, RenderError> {
    let mut rendered = renderer.render(&task.sidc, &task.unit.options)?;
    rendered.svg = apply_post_process(rendered.svg, task.confidence.post_process);
    rendered.svg = format!("{}\n{}", task.metadata_comment(), rendered.svg);
    Ok(rendered)
}

/// Apply the confidence transform to a rendered document.
fn apply_post_process(svg: String, post: PostProcess) -> String {
    match post {
        PostProcess::None => svg,
        PostProcess::ApplyOpacity(value) => {
            svg.replacen("<svg ", &format!(r#"<svg opacity="{value}" "#), 1)
        }
    }
}

fn write_manifest(symbols: Vec<ManifestEntry>, sink: &dyn OutputSink, result: &mut BatchResult) {
    let manifest = Manifest {
        tool: config::APP_NAME,
        version: config::APP_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        symbols,
    };
    match serde_json::to_string_pretty(&manifest) {
        Ok(json) => {
            if let Err(e) = sink.write(MANIFEST_NAME, &json) {
                result.errors += 1;
                tracing::error!(error = %e, "manifest write failed");
            }
        }
        Err(e) => {
            result.errors += 1;
            tracing::error!(error = %e, "manifest serialization failed");
        }
    }
}
