//! Page controllers: fetch content, derive the view model, degrade on failure

use hostel_content::category::CategoryGroup;
use hostel_content::contact::{ContactError, ContactFields, ContactForm, SubmissionNotice};
use hostel_content::facilities::{group_facilities, icon_key, key_facilities};
use hostel_content::gallery::{Facet, GalleryView};
use hostel_content::{Collection, HostelFacility, RoomType};
use serde::Serialize;

use crate::config::CatalogConfig;
use crate::content::ContentStore;
use crate::submitter::InquirySubmitter;

/// Shown on a page whose content fetch failed
pub const CONTENT_UNAVAILABLE: &str = "Some content could not be loaded right now.";

/// Keep the records of a successful read, or log and fall back to none
fn or_degraded<T: Collection>(result: crate::Result<Vec<T>>) -> (Vec<T>, bool) {
    match result {
        Ok(items) => (items, false),
        Err(e) => {
            tracing::warn!("Failed to load collection '{}': {}", T::ID, e);
            (Vec::new(), true)
        }
    }
}

/// A key facility with the icon the landing page draws for it
#[derive(Debug, Clone, Serialize)]
pub struct KeyFacility {
    #[serde(flatten)]
    pub facility: HostelFacility,
    pub icon: &'static str,
}

/// Key facilities with their icons
pub fn derive_key_facilities(
    facilities: Vec<HostelFacility>,
    catalog: &CatalogConfig,
) -> Vec<KeyFacility> {
    key_facilities(facilities, catalog.key_facility_limit)
        .into_iter()
        .map(|facility| KeyFacility {
            icon: icon_key(&facility),
            facility,
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct HomePage {
    pub key_facilities: Vec<KeyFacility>,
    pub degraded: bool,
}

pub async fn home_page(store: &dyn ContentStore, catalog: &CatalogConfig) -> HomePage {
    let (facilities, degraded) = or_degraded(store.facilities().await);
    let key_facilities = derive_key_facilities(facilities, catalog);
    tracing::debug!("Home page shows {} key facilities", key_facilities.len());

    HomePage {
        key_facilities,
        degraded,
    }
}

#[derive(Debug, Clone)]
pub struct GalleryPage {
    pub view: GalleryView,
    pub degraded: bool,
}

/// Gallery page for the `category` query parameter
pub async fn gallery_page(
    store: &dyn ContentStore,
    category: Option<&str>,
    catalog: &CatalogConfig,
) -> GalleryPage {
    let (images, degraded) = or_degraded(store.gallery_images().await);
    let view = GalleryView::new(
        images,
        Facet::from_query(category),
        catalog.category_matching,
    );
    tracing::debug!(
        "Gallery page: facet '{}', {} of {} images",
        view.selected.label(),
        view.visible().len(),
        view.images.len()
    );

    GalleryPage { view, degraded }
}

#[derive(Debug, Clone)]
pub struct RoomsFacilitiesPage {
    pub rooms: Vec<RoomType>,
    pub facility_groups: Vec<CategoryGroup<HostelFacility>>,
    pub degraded: bool,
}

/// Rooms and grouped facilities, fetched concurrently
pub async fn rooms_facilities_page(
    store: &dyn ContentStore,
    catalog: &CatalogConfig,
) -> RoomsFacilitiesPage {
    let (rooms, facilities) = tokio::join!(store.room_types(), store.facilities());
    let (rooms, rooms_degraded) = or_degraded(rooms);
    let (facilities, facilities_degraded) = or_degraded(facilities);

    RoomsFacilitiesPage {
        rooms,
        facility_groups: group_facilities(facilities, catalog.category_matching),
        degraded: rooms_degraded || facilities_degraded,
    }
}

/// One of the values listed on the about page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreValue {
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure ("10+", "Years of Experience")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AboutPage {
    pub introduction: &'static [&'static str],
    pub core_values: &'static [CoreValue],
    pub stats: &'static [Stat],
    pub mission: &'static str,
}

const INTRODUCTION: [&str; 3] = [
    "City Hostel has been serving students in Bhawarkua, Indore for over a decade, providing safe, clean, and comfortable accommodation for college students. We understand that moving away from home for education is a significant step, and we strive to make this transition as smooth as possible.",
    "Our hostel is strategically located near major educational institutions in Indore, making it convenient for students to commute to their colleges. We provide a supportive environment that balances academic focus with social interaction, helping students grow both personally and professionally.",
    "We welcome both male and female students, maintaining separate facilities to ensure privacy and comfort for all residents. Our experienced management team is dedicated to creating a positive living experience where students can focus on their studies while enjoying a sense of community.",
];

const CORE_VALUES: [CoreValue; 4] = [
    CoreValue {
        title: "Safety First",
        description: "Your security is our top priority. We maintain 24/7 security with CCTV surveillance, secure entry systems, and trained staff to ensure a safe living environment for all students.",
    },
    CoreValue {
        title: "Cleanliness",
        description: "We maintain the highest standards of hygiene and cleanliness. Regular cleaning schedules, sanitized common areas, and well-maintained facilities ensure a healthy living space.",
    },
    CoreValue {
        title: "Comfort",
        description: "Experience the comfort of home with well-furnished rooms, quality amenities, and a peaceful environment conducive to both study and relaxation.",
    },
    CoreValue {
        title: "Experience",
        description: "With over 10 years of experience in student accommodation, we understand the unique needs of students and provide personalized care and support.",
    },
];

const STATS: [Stat; 3] = [
    Stat {
        value: "10+",
        label: "Years of Experience",
    },
    Stat {
        value: "500+",
        label: "Happy Students",
    },
    Stat {
        value: "24/7",
        label: "Security & Support",
    },
];

const MISSION: &str = "To provide students with a safe, comfortable, and affordable living environment that supports their academic journey and personal growth. We are committed to maintaining the highest standards of service, cleanliness, and security while fostering a community where students can thrive.";

/// The about page is static
pub fn about_page() -> AboutPage {
    AboutPage {
        introduction: &INTRODUCTION,
        core_values: &CORE_VALUES,
        stats: &STATS,
        mission: MISSION,
    }
}

/// Result of a contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Delivered; the form has been cleared
    Sent(SubmissionNotice),
    /// Required fields were blank; the form keeps what was entered
    Incomplete {
        missing: Vec<&'static str>,
        fields: ContactFields,
    },
}

/// Drive one submission through the form's state machine
pub async fn submit_contact(
    form: &mut ContactForm,
    submitter: &dyn InquirySubmitter,
) -> crate::Result<ContactOutcome> {
    let inquiry = match form.begin_submit() {
        Ok(inquiry) => inquiry,
        Err(ContactError::MissingFields(missing)) => {
            tracing::debug!("Contact form incomplete, missing: {:?}", missing);
            return Ok(ContactOutcome::Incomplete {
                missing,
                fields: form.fields().clone(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if let Err(e) = submitter.submit(&inquiry).await {
        tracing::warn!("{} submitter failed: {}", submitter.type_name(), e);
    }

    let notice = form.complete()?;
    Ok(ContactOutcome::Sent(notice))
}
