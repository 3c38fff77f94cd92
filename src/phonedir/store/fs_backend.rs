use super::backend::StorageBackend;
use crate::error::{DirectoryError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    fn parent_dir(&self) -> PathBuf {
        match self.data_file.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(DirectoryError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .data_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("directory");
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn read_raw(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.data_file) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(DirectoryError::Io(err)),
        }
    }

    fn write_raw(&self, content: &[u8]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        // Atomic write
        let tmp_file = self.tmp_path(&dir);
        fs::write(&tmp_file, content).map_err(DirectoryError::Io)?;
        if let Err(err) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(DirectoryError::Io(err));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}
