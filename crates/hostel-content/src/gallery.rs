//! Gallery ordering, facets and filtering

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::category::CategoryMatching;
use crate::entities::GalleryImage;

/// Label of the implicit facet that shows every image
pub const ALL_FACET: &str = "All";

/// The facet a visitor has selected
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Category(String),
}

impl Facet {
    /// Parse the `category` query parameter; absent, empty or "All" selects everything
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL_FACET) => Facet::All,
            Some(category) => Facet::Category(category.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Facet::All => ALL_FACET,
            Facet::Category(category) => category,
        }
    }
}

impl Serialize for Facet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Stable ascending sort by display order (absent counts as 0)
pub fn sort_by_display_order(mut images: Vec<GalleryImage>) -> Vec<GalleryImage> {
    // -0 and 0 compare equal so signed zeros keep their input order
    images.sort_by(|a, b| {
        a.display_order_or_default()
            .partial_cmp(&b.display_order_or_default())
            .unwrap_or(Ordering::Equal)
    });
    images
}

/// "All" followed by each distinct present category, in order of first appearance
pub fn facets(images: &[GalleryImage], matching: CategoryMatching) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut facets = vec![ALL_FACET.to_string()];
    for image in images {
        let Some(raw) = image.category.as_deref() else {
            continue;
        };
        if let Some(key) = matching.key(Some(raw)) {
            if seen.insert(key) {
                facets.push(matching.label(raw));
            }
        }
    }
    facets
}

/// Images visible under a facet; "All" is the identity
pub fn filter_by_facet<'a>(
    images: &'a [GalleryImage],
    facet: &Facet,
    matching: CategoryMatching,
) -> Vec<&'a GalleryImage> {
    match facet {
        Facet::All => images.iter().collect(),
        Facet::Category(selected) => images
            .iter()
            .filter(|image| matching.matches(image.category.as_deref(), selected))
            .collect(),
    }
}

/// Everything the gallery page renders
#[derive(Debug, Clone)]
pub struct GalleryView {
    /// All images, sorted by display order
    pub images: Vec<GalleryImage>,
    pub facets: Vec<String>,
    pub selected: Facet,
    matching: CategoryMatching,
}

impl GalleryView {
    /// Sort the fetched images and resolve the selection against the known facets.
    ///
    /// A selection naming no known category falls back to "All".
    pub fn new(images: Vec<GalleryImage>, selected: Facet, matching: CategoryMatching) -> Self {
        let images = sort_by_display_order(images);
        let facets = facets(&images, matching);

        let selected = match selected {
            Facet::All => Facet::All,
            Facet::Category(requested) => facets
                .iter()
                .skip(1)
                .find(|facet| {
                    matching.key(Some(facet.as_str())) == matching.key(Some(requested.as_str()))
                })
                .map(|facet| Facet::Category(facet.clone()))
                .unwrap_or(Facet::All),
        };

        Self {
            images,
            facets,
            selected,
            matching,
        }
    }

    /// Images under the selected facet, in display order
    pub fn visible(&self) -> Vec<&GalleryImage> {
        filter_by_facet(&self.images, &self.selected, self.matching)
    }

    /// The facet bar only makes sense when there is more than "All"
    pub fn has_facet_bar(&self) -> bool {
        self.facets.len() > 1
    }
}
