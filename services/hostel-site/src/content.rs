//! Content store trait: one typed read per CMS collection

use async_trait::async_trait;
use hostel_content::{Collection, GalleryImage, HostelFacility, RoomType};
use serde::Deserialize;

/// Read-only access to the CMS collections.
///
/// Every read returns the whole collection in backend order. Failures are
/// reported to the caller, which decides how a page degrades.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ContentStore: Send + Sync {
    async fn gallery_images(&self) -> crate::Result<Vec<GalleryImage>>;

    async fn facilities(&self) -> crate::Result<Vec<HostelFacility>>;

    async fn room_types(&self) -> crate::Result<Vec<RoomType>>;
}

/// Document shape shared by every backend: `{"items": [...]}`
#[derive(Debug, Deserialize)]
struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Parse a collection document
pub fn parse_items<T: Collection>(body: &str) -> crate::Result<Vec<T>> {
    let envelope: ItemsEnvelope<T> = serde_json::from_str(body)?;
    tracing::debug!("Parsed {} records from '{}'", envelope.items.len(), T::ID);
    Ok(envelope.items)
}
