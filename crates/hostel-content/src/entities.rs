//! CMS record types
//!
//! Field names follow the CMS wire format: `_id` plus camelCase fields,
//! all optional except the identifier. Unknown fields are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type stored in a named CMS collection
pub trait Collection: DeserializeOwned + Send + 'static {
    /// Collection identifier in the content store
    const ID: &'static str;
}

/// Anything carrying a free-text category label
pub trait Categorized {
    fn category(&self) -> Option<&str>;
}

/// An image shown on the gallery page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    #[serde(rename = "_id")]
    pub id: String,
    pub image_file: Option<String>,
    pub image_title: Option<String>,
    pub image_description: Option<String>,
    pub category: Option<String>,
    pub display_order: Option<f64>,
    pub alt_text: Option<String>,
}

impl GalleryImage {
    /// Sort key; absent display order counts as 0
    pub fn display_order_or_default(&self) -> f64 {
        self.display_order.unwrap_or(0.0)
    }

    /// Alt text, falling back to the title and then a generic label
    pub fn alt_or_fallback(&self) -> &str {
        non_empty(self.alt_text.as_deref())
            .or_else(|| non_empty(self.image_title.as_deref()))
            .unwrap_or("Gallery image")
    }
}

impl Collection for GalleryImage {
    const ID: &'static str = "galleryimages";
}

impl Categorized for GalleryImage {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// A hostel facility (wifi, mess, security, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelFacility {
    #[serde(rename = "_id")]
    pub id: String,
    pub facility_name: Option<String>,
    pub description: Option<String>,
    pub is_key_facility: Option<bool>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub availability: Option<String>,
}

impl HostelFacility {
    /// Whether the facility is promoted onto the landing page
    pub fn is_key(&self) -> bool {
        self.is_key_facility.unwrap_or(false)
    }
}

impl Collection for HostelFacility {
    const ID: &'static str = "hostelfacilities";
}

impl Categorized for HostelFacility {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// A bookable room type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[serde(rename = "_id")]
    pub id: String,
    pub room_name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<u32>,
    pub monthly_price: Option<f64>,
    pub room_image: Option<String>,
    pub is_ac: Option<bool>,
    pub room_area: Option<f64>,
}

impl Collection for RoomType {
    const ID: &'static str = "roomtypes";
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
