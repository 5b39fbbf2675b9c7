use clap::Parser;

use crate::gradle;
use crate::scan;
use crate::util::{IoResult, Project};

#[derive(Debug, Parser)]
pub struct InspectCommand {
    /// Print the detected settings as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub async fn run(self, dir: &str) -> IoResult<()> {
        let project = Project::new_in(dir)?;
        let build_files = scan::find_build_files(&project.root);
        let info = gradle::extract(&project, &build_files).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&info)?);
            return Ok(());
        }

        println!("project information:");
        gradle::print_info(&info);
        Ok(())
    }
}
