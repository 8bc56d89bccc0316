use std::fmt;

use crate::global_constants::{DISPLAY_NAME_PREFIX, UNKNOWN_RESOLUTION};

/// A physical, non-mirrored display as reported by one enumeration call.
///
/// `index` is the 1-based position in the returned list, never an OS id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub index: u32,
    pub name: String,
    pub resolution: String,
}

impl Display {
    pub fn build(index: u32, name: Option<&str>, resolution: Option<String>) -> Self {
        let name = match name.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => Self::fallback_name(index),
        };

        Self {
            index,
            name,
            resolution: resolution.unwrap_or_else(|| UNKNOWN_RESOLUTION.to_string()),
        }
    }

    pub fn fallback_name(index: u32) -> String {
        format!("{} {}", DISPLAY_NAME_PREFIX, index)
    }

    pub fn format_resolution(width: &str, height: &str) -> String {
        format!("{}x{}", width, height)
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.resolution)
    }
}

/// Builds displays from already-filtered entries, numbering them from 1.
pub fn number_displays<I>(entries: I) -> Vec<Display>
where
    I: IntoIterator<Item = (Option<String>, Option<String>)>,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(position, (name, resolution))| {
            Display::build(position as u32 + 1, name.as_deref(), resolution)
        })
        .collect()
}
