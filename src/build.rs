use std::path::PathBuf;

use clap::Parser;

use crate::docker::{DockerCli, ImageBuilder};
use crate::generate::GenerateCommand;
use crate::util::{IoResult, Project};

#[derive(Debug, Parser)]
pub struct BuildCommand {
    /// Tag for the built image, e.g. my-project:latest.
    ///
    /// When omitted or blank, the Dockerfile is still generated but the
    /// docker build is skipped.
    pub tag: Option<String>,

    /// Where to write the generated Dockerfile
    #[arg(short, long, default_value = "Dockerfile")]
    pub output: PathBuf,
}

impl BuildCommand {
    pub async fn run(self, dir: &str) -> IoResult<()> {
        self.run_with(dir, &DockerCli).await
    }

    async fn run_with(&self, dir: &str, builder: &dyn ImageBuilder) -> IoResult<()> {
        let generate = GenerateCommand {
            output: self.output.clone(),
        };
        generate.run(dir).await?;

        let tag = match self.image_tag() {
            Some(tag) => tag,
            None => {
                println!("no image tag given, skipping the build");
                return Ok(());
            }
        };

        let project = Project::new_in(dir)?;
        println!("building image '{tag}'");
        builder.build(&project.root, tag).await?;
        println!("image built and tagged as '{tag}'");
        Ok(())
    }

    /// The image tag to build, or None when the build should be skipped
    fn image_tag(&self) -> Option<&str> {
        self.tag
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::io;
    use std::path::Path;

    use async_trait::async_trait;
    use tempfile::TempDir;

    struct MockBuilder {
        calls: Cell<usize>,
        fail: bool,
    }

    impl MockBuilder {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    #[async_trait(?Send)]
    impl ImageBuilder for MockBuilder {
        async fn build(&self, _context: &Path, _tag: &str) -> IoResult<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::Other, "exit status: 1"));
            }
            Ok(())
        }
    }

    fn command(tag: Option<&str>, output: &Path) -> BuildCommand {
        BuildCommand {
            tag: tag.map(str::to_owned),
            output: output.to_path_buf(),
        }
    }

    fn project_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("build.gradle"),
            "implementation \"a:b:1.0\"\n",
        )
        .unwrap();
        dir
    }

    #[tokio::test]
    async fn missing_tag_skips_the_build() {
        let dir = project_dir();
        let output = dir.path().join("Dockerfile");
        let builder = MockBuilder::new(false);

        command(None, &output)
            .run_with(dir.path().to_str().unwrap(), &builder)
            .await
            .unwrap();

        assert_eq!(builder.calls.get(), 0);
        assert!(output.is_file());
    }

    #[tokio::test]
    async fn blank_tag_skips_the_build() {
        let dir = project_dir();
        let output = dir.path().join("Dockerfile");
        let builder = MockBuilder::new(false);

        command(Some("   "), &output)
            .run_with(dir.path().to_str().unwrap(), &builder)
            .await
            .unwrap();

        assert_eq!(builder.calls.get(), 0);
    }

    #[tokio::test]
    async fn tag_is_trimmed_before_the_build() {
        let dir = project_dir();
        let output = dir.path().join("Dockerfile");
        let builder = MockBuilder::new(false);

        command(Some(" demo:latest "), &output)
            .run_with(dir.path().to_str().unwrap(), &builder)
            .await
            .unwrap();

        assert_eq!(builder.calls.get(), 1);
    }

    #[tokio::test]
    async fn failed_build_propagates() {
        let dir = project_dir();
        let output = dir.path().join("Dockerfile");
        let builder = MockBuilder::new(true);

        let result = command(Some("demo:latest"), &output)
            .run_with(dir.path().to_str().unwrap(), &builder)
            .await;

        assert!(result.is_err());
        assert_eq!(builder.calls.get(), 1);
        // the generated Dockerfile stays on disk, only the build failed
        assert!(output.is_file());
    }

    #[tokio::test]
    async fn missing_project_dir_aborts_before_any_write() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let output = dir.path().join("Dockerfile");
        let builder = MockBuilder::new(false);

        let result = command(Some("demo:latest"), &output)
            .run_with(missing.to_str().unwrap(), &builder)
            .await;

        assert!(result.is_err());
        assert_eq!(builder.calls.get(), 0);
        assert!(!output.exists());
    }
}
