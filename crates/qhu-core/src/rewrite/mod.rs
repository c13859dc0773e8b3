//! Line rewriting engine for Qualtrics header scripts.
//!
//! One linear pass: each line is classified, image assignments are re-emitted
//! against the configured images root, and every other line is copied through
//! byte-for-byte. The pass is stateless across lines, so the output has
//! exactly as many lines as the input, in input order.

mod error;
mod file;
mod report;

pub use error::MalformedLineError;
pub use file::rewrite_file;
pub use report::{RewriteOutput, RewriteReport, RewrittenImage};

use crate::header::{self, HeaderLine, MalformedKind};
use crate::image_url::ImageRoot;
use crate::tasks;

/// Per-line result of [`HeaderRewriter::rewrite_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Replaced by a reconstructed image assignment.
    Image(RewrittenImage),
    /// No markers; the line is copied through untouched.
    Passthrough,
    /// Markers present but unusable; copied through, or an error in strict
    /// mode.
    Malformed(MalformedKind),
}

/// Rewrites header lines against one images root.
#[derive(Debug, Clone)]
pub struct HeaderRewriter {
    root: ImageRoot,
    strict: bool,
}

impl HeaderRewriter {
    /// Rewriter for the given images root; malformed lines are copied
    /// through with a warning.
    pub fn new(root: ImageRoot) -> Self {
        Self {
            root,
            strict: false,
        }
    }

    /// Fail on malformed lines instead of copying them through.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Rewrites a single line.
    ///
    /// `line_no` is 1-based and only recorded in the outcome. `raw` may
    /// include its terminator; a rewritten line never keeps it (the tail
    /// after the value marker, CR included, is dropped by design of the
    /// header grammar).
    pub fn rewrite_line(&self, line_no: usize, raw: &str) -> LineOutcome {
        match header::classify(raw) {
            HeaderLine::ImageAssignment { name } => {
                // Task codes are searched across the whole line, not just
                // the name; a code in the old value still counts.
                let task = tasks::folder_for_line(raw);
                let folder = task.map(|t| t.folder).unwrap_or("");
                let text = format!(
                    "{}{}={};",
                    header::URL_MARKER,
                    name,
                    self.root.value_literal(folder, name)
                );
                LineOutcome::Image(RewrittenImage {
                    line_no,
                    name: name.to_string(),
                    task_code: task.map(|t| t.code),
                    text,
                })
            }
            HeaderLine::Malformed(kind) => LineOutcome::Malformed(kind),
            HeaderLine::Plain => LineOutcome::Passthrough,
        }
    }

    /// Rewrites a whole header document held in memory.
    ///
    /// Rewritten lines are emitted with a bare `\n`; passthrough lines keep
    /// their original bytes, terminator (or lack of one) included. In strict
    /// mode the first malformed line aborts the pass.
    pub fn rewrite_text(&self, text: &str) -> Result<RewriteOutput, MalformedLineError> {
        let mut out = String::with_capacity(text.len());
        let mut report = RewriteReport::default();
        for (idx, raw) in text.split_inclusive('\n').enumerate() {
            let line_no = idx + 1;
            report.total_lines += 1;
            match self.rewrite_line(line_no, raw) {
                LineOutcome::Image(image) => {
                    out.push_str(&image.text);
                    out.push('\n');
                    if image.task_code.is_none() {
                        report.without_folder += 1;
                    }
                    report.images.push(image);
                }
                LineOutcome::Passthrough => {
                    out.push_str(raw);
                    report.passed_through += 1;
                }
                LineOutcome::Malformed(kind) => {
                    if self.strict {
                        return Err(MalformedLineError { line_no, kind });
                    }
                    tracing::warn!("line {}: {}; copied through", line_no, kind);
                    out.push_str(raw);
                    report.malformed += 1;
                }
            }
        }
        Ok(RewriteOutput { text: out, report })
    }
}
