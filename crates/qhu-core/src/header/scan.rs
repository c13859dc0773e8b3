//! Marker scanning for header lines.

/// Marker opening an image variable name.
pub(crate) const URL_MARKER: &str = "URL_";

/// Marker opening the assigned value.
pub(crate) const VALUE_MARKER: &str = "=\"";

/// Byte bounds of the image name: end of the first `URL_` to start of the
/// first `="`. Returns `None` when either marker is missing. The bounds are
/// NOT ordered — callers must treat `end < start` as a malformed line.
pub(crate) fn name_bounds(line: &str) -> Option<(usize, usize)> {
    let url_at = line.find(URL_MARKER)?;
    let value_at = line.find(VALUE_MARKER)?;
    Some((url_at + URL_MARKER.len(), value_at))
}
