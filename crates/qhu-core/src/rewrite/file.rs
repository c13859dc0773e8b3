//! File-level rewrite: read fully, transform, write once.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::{HeaderRewriter, RewriteOutput};

/// Rewrites the header script at `input` into `output`.
///
/// The input is read in full before the output is opened, so both arguments
/// may name the same file. Errors carry the offending path.
pub fn rewrite_file(
    rewriter: &HeaderRewriter,
    input: &Path,
    output: &Path,
) -> Result<RewriteOutput> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("read header script: {}", input.display()))?;
    let rewritten = rewriter.rewrite_text(&text)?;
    fs::write(output, &rewritten.text)
        .with_context(|| format!("write updated header: {}", output.display()))?;
    Ok(rewritten)
}
