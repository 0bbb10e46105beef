use crate::error::StoreError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A lock file for atomic writes to a target path.
///
/// Creates `<target>.lock`, writes data to it, then atomically renames
/// to `<target>` on commit. The lock file is removed on drop if not committed,
/// leaving the previous target content in place.
pub struct Lockfile {
    target: PathBuf,
    lock_path: PathBuf,
    file: Option<fs::File>,
}

impl Lockfile {
    pub fn acquire(target: impl AsRef<Path>) -> Result<Self, StoreError> {
        let target = target.as_ref().to_path_buf();
        let mut lock_name = target.as_os_str().to_owned();
        lock_name.push(".lock");
        let lock_path = PathBuf::from(lock_name);

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
        {
            Ok(file) => Ok(Self {
                target,
                lock_path,
                file: Some(file),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(StoreError::LockConflict(format!(
                    "{} exists; another write is in progress or an earlier one crashed \
                     (delete the file if no other declog process is running)",
                    lock_path.display()
                )))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), StoreError> {
        match self.file {
            Some(ref mut file) => {
                file.write_all(data)?;
                file.sync_all()?;
                Ok(())
            }
            None => Err(StoreError::LockConflict(
                "lock file already committed or dropped".into(),
            )),
        }
    }

    /// Atomically commit: rename lock file to target.
    pub fn commit(mut self) -> Result<(), StoreError> {
        self.file.take();
        if let Err(e) = fs::rename(&self.lock_path, &self.target) {
            let _ = fs::remove_file(&self.lock_path);
            return Err(StoreError::Io(e));
        }
        Ok(())
    }
}

impl Drop for Lockfile {
    fn drop(&mut self) {
        if self.file.is_some() {
            let _ = fs::remove_file(&self.lock_path);
        }
    }
}
