//! Content store backed by JSON documents on disk

use std::path::PathBuf;

use async_trait::async_trait;
use hostel_content::{Collection, GalleryImage, HostelFacility, RoomType};

use crate::content::{parse_items, ContentStore};

/// Reads `{dir}/{collection}.json`, each holding `{"items": [...]}`
#[derive(Debug, Clone)]
pub struct DirectoryContentStore {
    dir: PathBuf,
}

impl DirectoryContentStore {
    pub fn new(dir: PathBuf) -> Self {
        tracing::debug!("Created DirectoryContentStore at {:?}", dir);
        Self { dir }
    }

    async fn read_all<T: Collection>(&self) -> crate::Result<Vec<T>> {
        let path = self.dir.join(format!("{}.json", T::ID));
        tracing::debug!("Reading collection '{}' from {:?}", T::ID, path);

        let body = match tokio::fs::read_to_string(&path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(crate::SiteError::Content(format!(
                    "Collection '{}' not found at {:?}",
                    T::ID,
                    path
                )));
            }
            Err(e) => return Err(e.into()),
        };

        parse_items(&body)
    }
}

#[async_trait]
impl ContentStore for DirectoryContentStore {
    async fn gallery_images(&self) -> crate::Result<Vec<GalleryImage>> {
        self.read_all().await
    }

    async fn facilities(&self) -> crate::Result<Vec<HostelFacility>> {
        self.read_all().await
    }

    async fn room_types(&self) -> crate::Result<Vec<RoomType>> {
        self.read_all().await
    }
}
