//! Folder names under `applications/` that are never datasets.

use crate::address::Segment;
use regex::Regex;
use std::sync::LazyLock;

/// Framework and portal apps living next to the datasets.
pub const SYSTEM_FOLDERS: [&str; 5] = ["admin", "examples", "welcome", "init", "dataset"];

/// Visualization apps; none are installed alongside datasets yet.
pub const VIS_FOLDERS: [&str; 0] = [];

static TEMP_FOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^temp_.*$").expect("static temp-folder pattern"));

pub fn is_excluded(folder: &str) -> bool {
    SYSTEM_FOLDERS.contains(&folder) || VIS_FOLDERS.contains(&folder) || TEMP_FOLDER.is_match(folder)
}

/// An unselected dataset is the landing app ("init"), itself a system folder.
pub fn is_excluded_segment(dataset: &Segment) -> bool {
    match dataset.selected() {
        Some(name) => is_excluded(name),
        None => true,
    }
}
