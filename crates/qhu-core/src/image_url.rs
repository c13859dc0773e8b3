//! Image URL assembly for the updated header.
//!
//! The emitted value keeps the images root split into two quoted fragments
//! joined by `+` (`"https:"+"//..."`) because Qualtrics refuses to save a
//! header containing one full URL literal. Joining both fragments plus the
//! task folder, image name, and extension yields the real raw.github URL.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// First fragment of the default images root.
pub const ROOT_SCHEME: &str = "https:";

/// Second fragment of the default images root: scheme-relative path to the
/// images tree of the Social_Decision_Making_Tasks repository.
pub const ROOT_PATH: &str =
    "//raw.githubusercontent.com/ntu-cam-clic/Social_Decision_Making_Tasks/main/Images/";

/// Images published as GIF animations. Every other image is a PNG.
const GIF_IMAGES: &[&str] = &[
    "AA_Figure4",
    "RPp_Figure3",
    "RPn_Figure3",
    "RPm_Figure3",
    "RD_Figure5",
];

/// File extension for an image name (exact-name whitelist, no pattern).
pub fn extension_for(name: &str) -> &'static str {
    if GIF_IMAGES.contains(&name) {
        ".gif"
    } else {
        ".png"
    }
}

/// Images root as the two fragments the header stores.
///
/// Defaults to [`ROOT_SCHEME`]/[`ROOT_PATH`]; an `[image_root]` section in
/// config.toml can point at a fork or another branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRoot {
    /// Leading fragment, normally `https:`.
    pub scheme: String,
    /// Scheme-relative remainder; must end with `/`.
    pub host_path: String,
}

impl Default for ImageRoot {
    fn default() -> Self {
        Self {
            scheme: ROOT_SCHEME.to_string(),
            host_path: ROOT_PATH.to_string(),
        }
    }
}

impl ImageRoot {
    /// Both fragments joined: the real URL prefix of the images tree.
    pub fn joined(&self) -> String {
        format!("{}{}", self.scheme, self.host_path)
    }

    /// Checks that the fragments join into an absolute URL ending in `/`.
    pub fn validate(&self) -> Result<()> {
        let joined = self.joined();
        url::Url::parse(&joined)
            .with_context(|| format!("images root is not a valid URL: {joined}"))?;
        if !self.host_path.ends_with('/') {
            anyhow::bail!("images root must end with '/': {joined}");
        }
        Ok(())
    }

    /// Quoted right-hand side for an image assignment.
    ///
    /// # Examples
    ///
    /// - `value_literal("Stag%20Hunt/", "SH_choice")` →
    ///   `"https:"+"//raw.githubusercontent.com/.../Images/Stag%20Hunt/SH_choice.png"`
    /// - `value_literal("", "AA_Figure4")` ends in `AA_Figure4.gif"` (no
    ///   folder, gif whitelist).
    pub fn value_literal(&self, folder: &str, name: &str) -> String {
        format!(
            "\"{}\"+\"{}{}{}{}\"",
            self.scheme,
            self.host_path,
            folder,
            name,
            extension_for(name)
        )
    }
}
