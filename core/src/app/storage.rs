use std::path::{Path, PathBuf};

use directories::ProjectDirs;

#[derive(Default, Clone, Debug)]
pub struct Storage {
  project_directories: Option<ProjectDirs>,
}
impl Storage {
  pub fn new(application: &str) -> Self {
    let project_directories = ProjectDirs::from("", "safeval", application);
    Self { project_directories }
  }

  pub fn project_directories(&self) -> Option<&ProjectDirs> {
    self.project_directories.as_ref()
  }
}

pub enum DirectoryKind {
  Data,
  LocalData,
  Cache,
}
impl Storage {
  pub fn directory(&self, kind: DirectoryKind) -> Option<&Path> {
    let project_directories = self.project_directories.as_ref()?;
    let path = match kind {
      DirectoryKind::Data => project_directories.data_dir(),
      DirectoryKind::LocalData => project_directories.data_local_dir(),
      DirectoryKind::Cache => project_directories.cache_dir(),
    };
    Some(path)
  }
  pub fn local_data_directory(&self) -> Option<&Path> {
    self.directory(DirectoryKind::LocalData)
  }

  pub fn file(&self, kind: DirectoryKind, file_path: impl AsRef<Path>) -> Option<PathBuf> {
    self.directory(kind).map(|d| d.join(file_path))
  }
  pub fn local_data_file(&self, file_path: impl AsRef<Path>) -> Option<PathBuf> {
    self.file(DirectoryKind::LocalData, file_path)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn files_live_in_their_directory() {
    let storage = Storage::new("test");
    if let Some(directory) = storage.local_data_directory() {
      let file = storage.local_data_file("log.txt").unwrap();
      assert!(file.starts_with(directory));
      assert!(file.ends_with("log.txt"));
    }
  }

  #[test]
  fn default_storage_has_no_directories() {
    let storage = Storage::default();
    assert!(storage.project_directories().is_none());
    assert!(storage.file(DirectoryKind::Cache, "cache.json").is_none());
  }
}
