use std::path::PathBuf;

use clap::Parser;

use crate::dockerfile;
use crate::gradle;
use crate::scan;
use crate::util::{IoResult, Project};

#[derive(Debug, Parser)]
pub struct GenerateCommand {
    /// Where to write the generated Dockerfile
    #[arg(short, long, default_value = "Dockerfile")]
    pub output: PathBuf,
}

impl GenerateCommand {
    pub async fn run(self, dir: &str) -> IoResult<()> {
        let project = Project::new_in(dir)?;
        let build_files = scan::find_build_files(&project.root);
        let info = gradle::extract(&project, &build_files).await?;
        dockerfile::write(&info, &self.output).await
    }
}
