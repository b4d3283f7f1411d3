use anyhow::*;
use directories_next::BaseDirs;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use crate::uploads::{UploadHandle, UploadStore};

#[cfg(test)]
mod tests;

pub fn get_default_upload_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .cache_dir()
        .to_path_buf();
    dir.push("quiztools");
    dir.push("uploads");
    Ok(dir)
}

/// Uploads stored as plain files in a single directory.
#[derive(Clone, Debug)]
pub struct LocalUploads {
    root: PathBuf,
}

impl LocalUploads {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        LocalUploads { root: root.into() }
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    pub fn create_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Could not create upload directory {:?}", self.root))
    }

    fn resolve(&self, handle: &UploadHandle) -> Result<PathBuf> {
        let name = Path::new(&handle.0);
        let mut components = name.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file_name)), None) => Ok(self.root.join(file_name)),
            _ => Err(anyhow!("Invalid upload name {:?}", handle.0)),
        }
    }
}

impl UploadStore for LocalUploads {
    fn open(&self, handle: &UploadHandle) -> Result<Box<dyn Read>> {
        let path = self.resolve(handle)?;
        let file: Box<dyn Read> =
            Box::new(File::open(&path).with_context(|| format!("Could not open {:?}", path))?);
        Ok(file)
    }

    fn delete(&self, handle: &UploadHandle) -> Result<()> {
        let path = self.resolve(handle)?;
        fs::remove_file(&path).with_context(|| format!("Could not delete {:?}", path))
    }
}
