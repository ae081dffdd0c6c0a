//! Site router: HTML pages, JSON API endpoints and health check

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use hostel_content::contact::{ContactFields, ContactForm};
use hostel_content::facilities::group_facilities;
use hostel_content::gallery::{Facet, GalleryView};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::content::ContentStore;
use crate::pages::{self, ContactOutcome};
use crate::render;
use crate::submitter::InquirySubmitter;

/// Site application state
#[derive(Clone)]
pub struct SiteState {
    pub content: Arc<dyn ContentStore>,
    pub submitter: Arc<dyn InquirySubmitter>,
    pub config: Arc<Config>,
}

#[derive(Debug, Deserialize)]
struct GalleryQuery {
    category: Option<String>,
}

/// Build the site axum router
pub fn build_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/rooms-facilities", get(rooms_facilities_handler))
        .route("/gallery", get(gallery_handler))
        .route("/contact", get(contact_handler).post(contact_submit_handler))
        .route("/api/gallery", get(api_gallery_handler))
        .route("/api/facilities/key", get(api_key_facilities_handler))
        .route("/api/facilities/grouped", get(api_grouped_facilities_handler))
        .route("/api/rooms", get(api_rooms_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn home_handler(State(site): State<SiteState>) -> impl IntoResponse {
    let page = pages::home_page(site.content.as_ref(), &site.config.catalog).await;
    Html(render::render_home(&page, &site.config.site))
}

async fn about_handler(State(site): State<SiteState>) -> impl IntoResponse {
    Html(render::render_about(&pages::about_page(), &site.config.site))
}

async fn rooms_facilities_handler(State(site): State<SiteState>) -> impl IntoResponse {
    let page = pages::rooms_facilities_page(site.content.as_ref(), &site.config.catalog).await;
    Html(render::render_rooms_facilities(&page, &site.config.site))
}

async fn gallery_handler(
    State(site): State<SiteState>,
    Query(query): Query<GalleryQuery>,
) -> impl IntoResponse {
    let page = pages::gallery_page(
        site.content.as_ref(),
        query.category.as_deref(),
        &site.config.catalog,
    )
    .await;
    Html(render::render_gallery(&page, &site.config.site))
}

async fn contact_handler(State(site): State<SiteState>) -> impl IntoResponse {
    Html(render::render_contact(&site.config.site, None))
}

async fn contact_submit_handler(
    State(site): State<SiteState>,
    Form(fields): Form<ContactFields>,
) -> Response {
    let mut form = ContactForm::new(fields);
    match pages::submit_contact(&mut form, site.submitter.as_ref()).await {
        Ok(outcome) => {
            let status = match outcome {
                ContactOutcome::Sent(_) => StatusCode::OK,
                ContactOutcome::Incomplete { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            };
            (
                status,
                Html(render::render_contact(&site.config.site, Some(&outcome))),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Contact submission failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render::render_contact(&site.config.site, None)),
            )
                .into_response()
        }
    }
}

fn content_error(e: crate::SiteError) -> Response {
    tracing::warn!("API content read failed: {}", e);
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "error": e.to_string() })),
    )
        .into_response()
}

async fn api_gallery_handler(
    State(site): State<SiteState>,
    Query(query): Query<GalleryQuery>,
) -> Response {
    match site.content.gallery_images().await {
        Ok(images) => {
            let view = GalleryView::new(
                images,
                Facet::from_query(query.category.as_deref()),
                site.config.catalog.category_matching,
            );
            Json(serde_json::json!({
                "selected": view.selected,
                "facets": view.facets,
                "images": view.visible(),
            }))
            .into_response()
        }
        Err(e) => content_error(e),
    }
}

async fn api_key_facilities_handler(State(site): State<SiteState>) -> Response {
    match site.content.facilities().await {
        Ok(facilities) => {
            Json(pages::derive_key_facilities(facilities, &site.config.catalog)).into_response()
        }
        Err(e) => content_error(e),
    }
}

async fn api_grouped_facilities_handler(State(site): State<SiteState>) -> Response {
    match site.content.facilities().await {
        Ok(facilities) => Json(group_facilities(
            facilities,
            site.config.catalog.category_matching,
        ))
        .into_response(),
        Err(e) => content_error(e),
    }
}

async fn api_rooms_handler(State(site): State<SiteState>) -> Response {
    match site.content.room_types().await {
        Ok(rooms) => Json(rooms).into_response(),
        Err(e) => content_error(e),
    }
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

async fn not_found_handler(State(site): State<SiteState>, uri: Uri) -> impl IntoResponse {
    tracing::debug!("No page at {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Html(render::render_not_found(&site.config.site, uri.path())),
    )
}
