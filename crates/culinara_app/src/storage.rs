use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use culinara_core::{Storage, StorageError};
use tempfile::NamedTempFile;

/// File-backed storage: one `<key>.json` file per key under a single
/// directory, written atomically via temp file and rename so a crash never
/// leaves a half-written blob behind.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn ensure_dir(&self) -> io::Result<()> {
        if self.dir.exists() {
            let meta = fs::metadata(&self.dir)?;
            if !meta.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "storage path is not a directory",
                ));
            }
            return Ok(());
        }
        fs::create_dir_all(&self.dir)
    }
}

impl Storage for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read(err.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_atomically = || -> io::Result<()> {
            self.ensure_dir()?;
            let target = self.path_for(key);
            let mut tmp = NamedTempFile::new_in(&self.dir)?;
            tmp.write_all(value.as_bytes())?;
            tmp.flush()?;
            tmp.as_file_mut().sync_all()?;
            // Replace any existing blob so the rename lands everywhere.
            if target.exists() {
                fs::remove_file(&target)?;
            }
            tmp.persist(&target).map_err(|err| err.error)?;
            Ok(())
        };
        write_atomically().map_err(|err| StorageError::Write(err.to_string()))
    }
}
