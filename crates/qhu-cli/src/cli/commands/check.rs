//! `qhu check` – verify the header is already in canonical form.

use anyhow::{Context, Result};
use qhu_core::config::QhuConfig;
use qhu_core::rewrite::HeaderRewriter;
use std::fs;
use std::path::Path;

use super::paths::header_path;

/// Returns true when a rewrite pass would reproduce the file byte-for-byte.
pub fn run_check(
    cfg: &QhuConfig,
    dir: Option<&Path>,
    input: Option<&Path>,
    strict: bool,
) -> Result<bool> {
    let input = header_path(cfg, dir, input, &cfg.input_filename);
    let root = cfg.resolved_image_root()?;

    let text = fs::read_to_string(&input)
        .with_context(|| format!("read header script: {}", input.display()))?;
    let outcome = HeaderRewriter::new(root).strict(strict).rewrite_text(&text)?;

    if outcome.text == text {
        println!(
            "{}: canonical ({} image URL(s))",
            input.display(),
            outcome.report.rewritten()
        );
        return Ok(true);
    }

    let changed = text
        .split_inclusive('\n')
        .zip(outcome.text.split_inclusive('\n'))
        .filter(|(before, after)| before != after)
        .count();
    println!(
        "{}: not canonical; a rewrite would change {} line(s)",
        input.display(),
        changed
    );
    Ok(false)
}
