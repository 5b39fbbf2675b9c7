//! Docker stuff

use std::io;
use std::path::Path;
use std::process::Command;

use async_trait::async_trait;

use crate::util::IoResult;

/// Turns a build context directory into a tagged image
#[async_trait(?Send)]
pub trait ImageBuilder {
    async fn build(&self, context: &Path, tag: &str) -> IoResult<()>;
}

/// Builds images by shelling out to the docker CLI.
///
/// Output streams straight through to the terminal; the call blocks
/// until docker exits.
pub struct DockerCli;

#[async_trait(?Send)]
impl ImageBuilder for DockerCli {
    async fn build(&self, context: &Path, tag: &str) -> IoResult<()> {
        let status = Command::new("docker")
            .args(["build", "-t", tag])
            .arg(context)
            .status()?;
        if !status.success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("docker build failed: {status}"),
            ));
        }
        Ok(())
    }
}
