//! `qhu rewrite` – rewrite the header script's image URLs.

use anyhow::Result;
use qhu_core::config::QhuConfig;
use qhu_core::rewrite::{rewrite_file, HeaderRewriter};
use std::path::Path;

use super::paths::header_path;

pub fn run_rewrite(
    cfg: &QhuConfig,
    dir: Option<&Path>,
    input: Option<&Path>,
    output: Option<&Path>,
    quiet: bool,
    strict: bool,
) -> Result<()> {
    let input = header_path(cfg, dir, input, &cfg.input_filename);
    let output = header_path(cfg, dir, output, &cfg.output_filename);
    let root = cfg.resolved_image_root()?;
    tracing::info!("rewrite {} -> {}", input.display(), output.display());

    let rewriter = HeaderRewriter::new(root).strict(strict);
    let outcome = rewrite_file(&rewriter, &input, &output)?;
    let report = &outcome.report;

    if !quiet {
        for image in &report.images {
            println!("{}", image.text);
        }
    }
    println!(
        "Rewrote {} image URL(s) across {} line(s): {} -> {}",
        report.rewritten(),
        report.total_lines,
        input.display(),
        output.display()
    );
    if report.without_folder > 0 {
        println!(
            "  {} image(s) matched no task code and stay at the images root",
            report.without_folder
        );
    }
    if report.malformed > 0 {
        println!(
            "  {} malformed URL line(s) copied through unchanged",
            report.malformed
        );
    }
    Ok(())
}
