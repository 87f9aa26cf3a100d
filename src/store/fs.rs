//! One JSON file per (zone, year) inside a cache directory.

use crate::errors::AppResult;
use crate::store::{BundleStorage, CacheKey};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct FsStorage {
    dir: PathBuf,
}

impl FsStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl BundleStorage for FsStorage {
    fn exists(&self, key: &CacheKey) -> bool {
        self.path_for(key).is_file()
    }

    fn read(&self, key: &CacheKey) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a sibling temp file, then rename over the target.
    fn write(&self, key: &CacheKey, payload: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;

        let target = self.path_for(key);
        let temp = self
            .dir
            .join(format!(".{}.{}.tmp", key.file_name(), std::process::id()));

        {
            let mut file = fs::File::create(&temp)?;
            file.write_all(payload.as_bytes())?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&temp, &target) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, key: &CacheKey) -> AppResult<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> AppResult<Vec<CacheKey>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry?;
            if let Some(key) = entry.file_name().to_str().and_then(CacheKey::from_file_name) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}
