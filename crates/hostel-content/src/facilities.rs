//! Facility selection for the landing page and the facilities listing

use crate::category::{group_by_category, CategoryGroup, CategoryMatching};
use crate::entities::HostelFacility;

/// Number of key facilities shown on the landing page
pub const KEY_FACILITY_LIMIT: usize = 6;

/// Bucket for facilities without a category
pub const FALLBACK_CATEGORY: &str = "Other";

/// Icon keys the landing page knows how to draw
const KNOWN_ICONS: [&str; 6] = ["wifi", "shield", "utensils", "wind", "book", "users"];

/// Key facilities in stored order, truncated to `limit`
pub fn key_facilities(facilities: Vec<HostelFacility>, limit: usize) -> Vec<HostelFacility> {
    facilities
        .into_iter()
        .filter(HostelFacility::is_key)
        .take(limit)
        .collect()
}

/// Icon key for a facility, derived from its lower-cased category
pub fn icon_key(facility: &HostelFacility) -> &'static str {
    let category = facility
        .category
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    KNOWN_ICONS
        .iter()
        .find(|icon| **icon == category)
        .copied()
        .unwrap_or("users")
}

/// Facilities grouped by category, "Other" for those without one
pub fn group_facilities(
    facilities: Vec<HostelFacility>,
    matching: CategoryMatching,
) -> Vec<CategoryGroup<HostelFacility>> {
    group_by_category(facilities, matching, FALLBACK_CATEGORY)
}
