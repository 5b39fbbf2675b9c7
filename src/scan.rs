//! Build file discovery

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File names recognized as Gradle build definitions
pub const BUILD_FILE_NAMES: [&str; 2] = ["build.gradle", "build.gradle.kts"];

/// Recursively collect all Gradle build files under the given root.
///
/// Paths come back in directory traversal order, which is stable within
/// a run but not across platforms. A missing or unreadable root yields
/// an empty list; callers validate the project path up front.
pub fn find_build_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| BUILD_FILE_NAMES.contains(&name))
        })
        .map(|entry| entry.into_path())
        .collect()
}
