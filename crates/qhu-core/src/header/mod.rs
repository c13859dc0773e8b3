//! Header-line classification.
//!
//! A Qualtrics header script assigns one JavaScript variable per image, e.g.
//! `URL_TGb_mainImg_round2="...";`. A line is an image assignment when it
//! contains both the `URL_` marker and the `="` value marker; the image name
//! is whatever sits between them. Everything else is copied through
//! untouched by the rewriter.

mod scan;

pub(crate) use scan::URL_MARKER;

/// Classification of one header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    /// `URL_<name>="...";` — `name` is the slice between the two markers.
    ImageAssignment { name: &'a str },
    /// Both markers present but unusable; see [`MalformedKind`].
    Malformed(MalformedKind),
    /// No image-URL markers on this line.
    Plain,
}

/// Ways a line can carry both markers yet not be a usable assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// The first `="` starts before the first `URL_` ends.
    ValueBeforeName,
    /// The markers are adjacent, leaving an empty image name.
    EmptyName,
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedKind::ValueBeforeName => write!(f, "value opens before the URL_ marker"),
            MalformedKind::EmptyName => write!(f, "empty image name between URL_ and =\""),
        }
    }
}

/// Classifies one line of a header script.
///
/// Only the FIRST occurrence of each marker counts, matching the original
/// header grammar. The name may contain anything except the markers
/// themselves; no trimming is applied.
pub fn classify(line: &str) -> HeaderLine<'_> {
    let (name_start, name_end) = match scan::name_bounds(line) {
        Some(bounds) => bounds,
        None => return HeaderLine::Plain,
    };
    if name_end < name_start {
        return HeaderLine::Malformed(MalformedKind::ValueBeforeName);
    }
    if name_end == name_start {
        return HeaderLine::Malformed(MalformedKind::EmptyName);
    }
    HeaderLine::ImageAssignment {
        name: &line[name_start..name_end],
    }
}
