//! Profile photo storage.
//!
//! Blob storage is an opaque capability: callers hand in bytes and get a
//! URL back. This implementation keeps photos in a local directory, one
//! file per user, served by the photo route.

use std::io;
use std::path::PathBuf;

use uuid::Uuid;

pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, user_id: Uuid) -> PathBuf {
        self.root.join(user_id.to_string())
    }

    /// Store the photo bytes and return the URL to save on the profile.
    pub async fn save(&self, user_id: Uuid, bytes: &[u8]) -> io::Result<String> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.path_for(user_id), bytes).await?;
        Ok(format!("/photos/{}", user_id))
    }

    pub async fn load(&self, user_id: Uuid) -> io::Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.path_for(user_id)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Remove the stored photo. Deleting a photo that was never uploaded
    /// is not an error.
    pub async fn delete(&self, user_id: Uuid) -> io::Result<()> {
        match tokio::fs::remove_file(self.path_for(user_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
