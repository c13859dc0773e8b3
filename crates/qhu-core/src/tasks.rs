//! Decision-making task categories and their image subfolders on GitHub.
//!
//! Each task's images live in their own subfolder under the images root, and
//! image names embed a short task code (e.g. `TGb_mainImg_round2`). The
//! folder names are stored pre-percent-encoded, exactly as they appear in
//! raw.githubusercontent.com URLs.

/// One task category: the code embedded in image names and the matching
/// percent-encoded subfolder (with trailing slash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskFolder {
    /// Substring code searched for in a header line, e.g. `_AA_`.
    pub code: &'static str,
    /// Percent-encoded subfolder under the images root, e.g.
    /// `Ambiguity%20Aversion/`.
    pub folder: &'static str,
}

/// All known tasks, in match-priority order. `folder_for_line` takes the
/// first code found in the line, so `_TGb_` must stay ahead of the plain
/// `_TG_` code.
pub const TASK_FOLDERS: &[TaskFolder] = &[
    TaskFolder { code: "_AA_", folder: "Ambiguity%20Aversion/" },
    TaskFolder { code: "_BS_", folder: "Battle%20of%20Sexes/" },
    TaskFolder { code: "_PD_", folder: "Prisoner's%20Dilemma/" },
    TaskFolder { code: "_RPm_", folder: "Risk%20Preference%20(Mixed)/" },
    TaskFolder { code: "_RPn_", folder: "Risk%20Preference%20(Negative%20Domain)/" },
    TaskFolder { code: "_RPp_", folder: "Risk%20Preference%20(Positive%20Domain)/" },
    TaskFolder { code: "_RD_", folder: "Risky%20Dictator/" },
    TaskFolder { code: "_SVO_", folder: "Social%20Value%20Orientation/" },
    TaskFolder { code: "_SH_", folder: "Stag%20Hunt/" },
    TaskFolder { code: "_TGb_", folder: "Trust%20Game%20(as%20Player%20B)/" },
    TaskFolder { code: "_TG_", folder: "Trust%20Game%20(with%20history)/" },
    TaskFolder { code: "_TGnh_", folder: "Trust%20Game%20(with%20no%20history)/" },
];

/// Picks the task folder for a header line by scanning the whole line for
/// task codes, in table order.
///
/// Returns `None` for lines without any known code; those images live
/// directly under the images root.
pub fn folder_for_line(line: &str) -> Option<&'static TaskFolder> {
    TASK_FOLDERS.iter().find(|task| line.contains(task.code))
}
