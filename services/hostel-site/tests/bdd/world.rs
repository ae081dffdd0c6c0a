//! BDD test world for the hostel site

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use cucumber::World;
use tower::ServiceExt;

use hostel_content::contact::ContactForm;
use hostel_content::{Collection, GalleryImage, HostelFacility, RoomType};
use hostel_site::config::Config;
use hostel_site::content::ContentStore;
use hostel_site::pages::ContactOutcome;
use hostel_site::site::{build_router, SiteState};
use hostel_site::submitter::SimulatedSubmitter;

/// An in-memory content store whose collections can be made to fail
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    pub gallery: Vec<GalleryImage>,
    pub facilities: Vec<HostelFacility>,
    pub rooms: Vec<RoomType>,
    pub failing: HashSet<&'static str>,
}

impl FakeStore {
    fn read<T: Collection + Clone>(&self, items: &[T]) -> hostel_site::Result<Vec<T>> {
        if self.failing.contains(T::ID) {
            return Err(hostel_site::SiteError::Http(format!(
                "GET /{} failed: connection refused",
                T::ID
            )));
        }
        Ok(items.to_vec())
    }
}

#[async_trait]
impl ContentStore for FakeStore {
    async fn gallery_images(&self) -> hostel_site::Result<Vec<GalleryImage>> {
        self.read(&self.gallery)
    }

    async fn facilities(&self) -> hostel_site::Result<Vec<HostelFacility>> {
        self.read(&self.facilities)
    }

    async fn room_types(&self) -> hostel_site::Result<Vec<RoomType>> {
        self.read(&self.rooms)
    }
}

#[derive(Debug, Default, World)]
pub struct HostelWorld {
    pub store: FakeStore,
    pub config: Config,

    // Last HTTP exchange
    pub response_status: Option<u16>,
    pub response_body: Option<String>,

    // Contact form state machine
    pub contact_form: Option<ContactForm>,
    pub contact_outcome: Option<ContactOutcome>,
}

impl HostelWorld {
    fn state(&self) -> SiteState {
        SiteState {
            content: Arc::new(self.store.clone()),
            submitter: Arc::new(SimulatedSubmitter::new(Duration::ZERO)),
            config: Arc::new(self.config.clone()),
        }
    }

    async fn send(&mut self, request: Request<Body>) {
        let response = build_router(self.state()).oneshot(request).await.unwrap();
        self.response_status = Some(response.status().as_u16());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        self.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
    }

    pub async fn get(&mut self, uri: &str) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await;
    }

    pub async fn post_form(&mut self, uri: &str, form: String) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .unwrap();
        self.send(request).await;
    }

    pub fn body(&self) -> &str {
        self.response_body.as_deref().expect("no response body")
    }
}
