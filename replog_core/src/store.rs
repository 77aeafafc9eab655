//! User document store with file locking.
//!
//! Each user is a self-contained JSON document at `<data_dir>/users/<uuid>.json`.
//! Reads take a shared lock; writes serialize to a temp file under an
//! exclusive lock and atomically rename over the target. Appending an
//! exercise is load-modify-save with no transaction across the pair, so
//! concurrent appends to the same user are last-write-wins.

use crate::{Error, Exercise, Result, User};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Storage operations backing the HTTP handlers
pub trait UserStore {
    fn create_user(&self, name: &str) -> Result<User>;
    fn list_users(&self) -> Result<Vec<User>>;
    fn get_user(&self, id: &str) -> Result<User>;
    fn add_exercise(&self, id: &str, exercise: Exercise) -> Result<User>;
}

/// JSON document store rooted at a data directory
#[derive(Clone, Debug)]
pub struct JsonDocStore {
    users_dir: PathBuf,
}

impl JsonDocStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            users_dir: data_dir.into().join("users"),
        }
    }

    fn document_path(&self, id: Uuid) -> PathBuf {
        self.users_dir.join(format!("{}.json", id))
    }

    /// Parse an incoming id, mapping garbage to UserNotFound
    ///
    /// A malformed id can never resolve to a document, so it reports the
    /// same way as a missing one.
    fn parse_id(id: &str) -> Result<Uuid> {
        Uuid::parse_str(id).map_err(|_| Error::UserNotFound(id.to_string()))
    }

    /// Load a user document with shared locking
    fn load_document(&self, path: &Path, id: &str) -> Result<User> {
        if !path.exists() {
            return Err(Error::UserNotFound(id.to_string()));
        }

        let file = File::open(path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        let user = serde_json::from_str::<User>(&contents)?;
        tracing::debug!("Loaded user document {:?}", path);
        Ok(user)
    }

    /// Save a user document atomically
    ///
    /// Writes to a temp file in the same directory, syncs, then renames
    /// over the target.
    fn save_document(&self, user: &User) -> Result<()> {
        std::fs::create_dir_all(&self.users_dir)?;

        let temp = NamedTempFile::new_in(&self.users_dir)?;

        // Exclusive lock on the temp file to serialize concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(user)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(self.document_path(user.id))
            .map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved user document for {}", user.id);
        Ok(())
    }
}

impl UserStore for JsonDocStore {
    fn create_user(&self, name: &str) -> Result<User> {
        if name.trim().is_empty() {
            return Err(Error::missing_field("username"));
        }

        let user = User::new(name);
        self.save_document(&user)?;
        tracing::info!("Created user {} ({})", user.name, user.id);
        Ok(user)
    }

    fn list_users(&self) -> Result<Vec<User>> {
        if !self.users_dir.exists() {
            return Ok(Vec::new());
        }

        let mut users = Vec::new();
        for entry in std::fs::read_dir(&self.users_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();

            match self.load_document(&path, &id) {
                Ok(user) => users.push(user),
                Err(e) => {
                    // Skip unreadable documents, don't fail the listing
                    tracing::warn!("Skipping user document {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Listed {} users", users.len());
        Ok(users)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        let uuid = Self::parse_id(id)?;
        self.load_document(&self.document_path(uuid), id)
    }

    fn add_exercise(&self, id: &str, exercise: Exercise) -> Result<User> {
        let mut user = self.get_user(id)?;
        user.log.push(exercise);
        self.save_document(&user)?;
        tracing::debug!("Appended exercise to user {} (count {})", user.id, user.count());
        Ok(user)
    }
}
