//! Gradle stuff

use std::path::PathBuf;

use regex::Regex;
use serde::Serialize;
use tokio::fs;

use crate::util::{IoResult, Project};

/// Java toolchain version used when no build file declares one
pub const DEFAULT_JAVA_VERSION: &str = "11";
/// Gradle version used when the wrapper does not pin one
pub const DEFAULT_GRADLE_VERSION: &str = "7.0";

/// Build parameters scraped from a Gradle project
#[derive(Debug, Serialize)]
pub struct GradleInfo {
    /// Java toolchain version, e.g. "17"
    pub java_version: String,
    /// Gradle distribution version, e.g. "8.4"
    pub gradle_version: String,
    /// Dependency declarations, verbatim as matched
    pub dependencies: Vec<String>,
}

/// Scrape build parameters out of the given build files.
///
/// This is a line-oriented text scan, not a Gradle evaluation. The first
/// `java(version = "N")` declaration across all files wins; every
/// recognized dependency line is collected in discovery order, duplicates
/// included. Files are visited in list order, so the result depends on
/// the traversal order of the scanner.
pub async fn extract(project: &Project, build_files: &[PathBuf]) -> IoResult<GradleInfo> {
    let java_re = Regex::new(r#"java\s*\(\s*version\s*=\s*['"](\d+)['"]\)"#).unwrap();
    let dep_re = Regex::new(
        r#"\b(implementation|api|compileOnly|runtimeOnly)\s*['"](.+?):(.+?):(.+?)['"]"#,
    )
    .unwrap();

    let mut java_version = None;
    let mut dependencies = Vec::new();
    for path in build_files {
        let content = fs::read_to_string(path).await?;
        for line in content.lines() {
            if java_version.is_none() {
                if let Some(caps) = java_re.captures(line) {
                    java_version = Some(caps[1].to_owned());
                }
            }
            if let Some(matched) = dep_re.find(line) {
                dependencies.push(matched.as_str().to_owned());
            }
        }
    }

    Ok(GradleInfo {
        java_version: java_version.unwrap_or_else(|| DEFAULT_JAVA_VERSION.to_owned()),
        gradle_version: wrapper_version(project)
            .await?
            .unwrap_or_else(|| DEFAULT_GRADLE_VERSION.to_owned()),
        dependencies,
    })
}

/// Read the pinned Gradle version out of gradle-wrapper.properties.
///
/// Matches the distribution archive name in lines like
/// `distributionUrl=...gradle-8.4-all.zip`. First matching line wins.
async fn wrapper_version(project: &Project) -> IoResult<Option<String>> {
    let path = project.wrapper_properties();
    if !path.exists() {
        return Ok(None);
    }
    let re = Regex::new(r"gradle-(\d+\.\d+(?:\.\d+)?)-all\.zip").unwrap();
    for line in fs::read_to_string(&path).await?.lines() {
        if let Some(caps) = re.captures(line) {
            return Ok(Some(caps[1].to_owned()));
        }
    }
    Ok(None)
}

/// Print the detected settings, one per line
pub fn print_info(info: &GradleInfo) {
    println!("  java version: {}", info.java_version);
    println!("  gradle version: {}", info.gradle_version);
    if info.dependencies.is_empty() {
        println!("  no dependencies found");
    } else {
        println!("  dependencies:");
        for dep in &info.dependencies {
            println!("    {dep}");
        }
    }
}
