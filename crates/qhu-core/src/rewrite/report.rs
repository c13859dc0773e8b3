//! Rewrite pass report: counters plus the emitted assignments.

/// One emitted image assignment (echoed by the CLI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenImage {
    /// 1-based input line number.
    pub line_no: usize,
    /// Image name extracted between the markers.
    pub name: String,
    /// Matched task code; `None` means the image sits directly under the
    /// images root.
    pub task_code: Option<&'static str>,
    /// Emitted line, without terminator.
    pub text: String,
}

/// Counters from one rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Lines seen; always equals lines emitted.
    pub total_lines: usize,
    /// Lines copied through without markers.
    pub passed_through: usize,
    /// Marker-carrying lines copied through as unusable (non-strict runs).
    pub malformed: usize,
    /// Rewritten images that matched no task code.
    pub without_folder: usize,
    /// Every emitted assignment, in input order.
    pub images: Vec<RewrittenImage>,
}

impl RewriteReport {
    /// Number of lines replaced by reconstructed assignments.
    pub fn rewritten(&self) -> usize {
        self.images.len()
    }
}

/// Full result of a rewrite pass over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutput {
    /// The complete output document.
    pub text: String,
    pub report: RewriteReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewritten_counts_emitted_images() {
        let mut report = RewriteReport::default();
        assert_eq!(report.rewritten(), 0);
        report.images.push(RewrittenImage {
            line_no: 1,
            name: "SH_choice".to_string(),
            task_code: Some("_SH_"),
            text: "URL_SH_choice=\"...\";".to_string(),
        });
        assert_eq!(report.rewritten(), 1);
    }
}
