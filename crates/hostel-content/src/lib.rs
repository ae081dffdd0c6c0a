//! Hostel content - typed CMS records and the derivations pages build on them
//!
//! Everything here is pure: records come in as plain values, view models
//! go out. Fetching and rendering live in the `hostel-site` service.

pub mod category;
pub mod contact;
pub mod entities;
pub mod facilities;
pub mod gallery;
pub mod links;
pub mod media;
pub mod nav;
pub mod rooms;

pub use category::{CategoryGroup, CategoryMatching};
pub use entities::{Categorized, Collection, GalleryImage, HostelFacility, RoomType};
