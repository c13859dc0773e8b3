//! Header-script path resolution shared by `rewrite` and `check`.

use qhu_core::config::QhuConfig;
use std::path::{Path, PathBuf};

/// Resolves a header-script path.
///
/// An explicit `--input`/`--output` path wins as given; otherwise the
/// configured filename is joined onto `--dir`, falling back to the
/// configured header_dir and then the current directory.
pub(crate) fn header_path(
    cfg: &QhuConfig,
    dir: Option<&Path>,
    explicit: Option<&Path>,
    filename: &str,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let base = dir
        .map(Path::to_path_buf)
        .or_else(|| cfg.header_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let cfg = QhuConfig::default();
        let path = header_path(
            &cfg,
            Some(Path::new("/surveys")),
            Some(Path::new("/tmp/custom.js")),
            &cfg.input_filename,
        );
        assert_eq!(path, Path::new("/tmp/custom.js"));
    }

    #[test]
    fn dir_flag_beats_configured_header_dir() {
        let cfg = QhuConfig {
            header_dir: Some(PathBuf::from("/from-config")),
            ..QhuConfig::default()
        };
        let path = header_path(&cfg, Some(Path::new("/from-flag")), None, &cfg.input_filename);
        assert_eq!(path, Path::new("/from-flag/QualtricsHeader.js"));
    }

    #[test]
    fn configured_header_dir_used_without_flag() {
        let cfg = QhuConfig {
            header_dir: Some(PathBuf::from("/from-config")),
            ..QhuConfig::default()
        };
        let path = header_path(&cfg, None, None, &cfg.output_filename);
        assert_eq!(path, Path::new("/from-config/QualtricsHeaderUpdated.js"));
    }

    #[test]
    fn current_directory_fallback() {
        let cfg = QhuConfig::default();
        let path = header_path(&cfg, None, None, &cfg.input_filename);
        assert_eq!(path, Path::new("./QualtricsHeader.js"));
    }
}
