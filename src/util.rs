use std::io;
use std::path::{Path, PathBuf};

pub type IoResult<T> = io::Result<T>;

/// A Gradle project on disk
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project
    pub root: PathBuf,
}

impl Project {
    /// Open the project at the given directory.
    ///
    /// The directory must exist; nothing is read from it here.
    pub fn new_in(dir: &str) -> IoResult<Self> {
        let path = Path::new(dir);
        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("project path '{dir}' does not exist"),
            ));
        }
        let root = dunce::canonicalize(path)?;
        Ok(Self { root })
    }

    /// Path of the gradle wrapper properties file
    pub fn wrapper_properties(&self) -> PathBuf {
        let mut path = self.root.join("gradle");
        path.push("wrapper");
        path.push("gradle-wrapper.properties");
        path
    }
}
