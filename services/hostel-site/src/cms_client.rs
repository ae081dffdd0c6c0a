//! HTTP CMS client

use std::sync::Arc;

use async_trait::async_trait;
use hostel_content::{Collection, GalleryImage, HostelFacility, RoomType};

use crate::content::{parse_items, ContentStore};
use crate::io::HttpClient;

/// Reads collections from `GET {base_url}/{collection}`
pub struct HttpContentStore {
    base_url: String,
    api_key: Option<String>,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HttpContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpContentStore")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.api_key.is_some())
            .finish()
    }
}

impl HttpContentStore {
    pub fn new(base_url: &str, api_key: Option<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created HttpContentStore at {}", base_url);

        Self {
            base_url,
            api_key,
            http,
        }
    }

    async fn fetch_all<T: Collection>(&self) -> crate::Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, T::ID);
        let mut headers = vec![("Accept", "application/json")];
        if let Some(key) = &self.api_key {
            headers.push(("Authorization", key.as_str()));
        }

        let response = self.http.get(&url, &headers).await?;
        if response.status != 200 {
            return Err(crate::SiteError::Content(format!(
                "Collection '{}' returned status {}: {}",
                T::ID,
                response.status,
                response.body
            )));
        }

        parse_items(&response.body)
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn gallery_images(&self) -> crate::Result<Vec<GalleryImage>> {
        self.fetch_all().await
    }

    async fn facilities(&self) -> crate::Result<Vec<HostelFacility>> {
        self.fetch_all().await
    }

    async fn room_types(&self) -> crate::Result<Vec<RoomType>> {
        self.fetch_all().await
    }
}
