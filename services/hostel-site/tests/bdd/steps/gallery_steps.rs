//! BDD step definitions for the gallery feature

use cucumber::{given, then, when};

use hostel_content::GalleryImage;

use crate::world::HostelWorld;

fn gallery_image(id: String, category: Option<String>, order: Option<f64>) -> GalleryImage {
    GalleryImage {
        image_title: Some(format!("Photo {}", id)),
        id,
        image_file: None,
        image_description: None,
        category,
        display_order: order,
        alt_text: None,
    }
}

fn position(world: &HostelWorld, id: &str) -> Option<usize> {
    world.body().find(&format!(r#"data-id="{}""#, id))
}

#[given(expr = "a gallery image {string} in category {string} with display order {int}")]
fn image_in_category(world: &mut HostelWorld, id: String, category: String, order: i32) {
    world
        .store
        .gallery
        .push(gallery_image(id, Some(category), Some(f64::from(order))));
}

#[given(expr = "a gallery image {string} without a category")]
fn image_without_category(world: &mut HostelWorld, id: String) {
    world.store.gallery.push(gallery_image(id, None, None));
}

#[when("the gallery page is requested")]
async fn gallery_requested(world: &mut HostelWorld) {
    world.get("/gallery").await;
}

#[when(expr = "the gallery is filtered by {string}")]
async fn gallery_filtered(world: &mut HostelWorld, category: String) {
    let uri = format!("/gallery?category={}", urlencoding::encode(&category));
    world.get(&uri).await;
}

#[then(expr = "image {string} should be shown before image {string}")]
fn image_before(world: &mut HostelWorld, first: String, second: String) {
    let a = position(world, &first).unwrap_or_else(|| panic!("image {} not shown", first));
    let b = position(world, &second).unwrap_or_else(|| panic!("image {} not shown", second));
    assert!(a < b, "image {} should come before image {}", first, second);
}

#[then(expr = "image {string} should be shown")]
fn image_shown(world: &mut HostelWorld, id: String) {
    assert!(position(world, &id).is_some(), "image {} not shown", id);
}

#[then(expr = "image {string} should not be shown")]
fn image_not_shown(world: &mut HostelWorld, id: String) {
    assert!(position(world, &id).is_none(), "image {} unexpectedly shown", id);
}

#[then(expr = "the category filter should offer {string}")]
fn filter_offers(world: &mut HostelWorld, facets: String) {
    let body = world.body();
    let mut last = body
        .find(r#"id="facets""#)
        .expect("no category filter shown");
    for facet in facets.split(", ") {
        let link = format!(">{}</a>", facet);
        let at = body[last..]
            .find(&link)
            .unwrap_or_else(|| panic!("facet {} missing or out of order", facet));
        last += at + link.len();
    }
}

#[then(expr = "the selected category should be {string}")]
fn selected_category(world: &mut HostelWorld, facet: String) {
    let expected = format!(r#"class="selected">{}</a>"#, facet);
    assert!(world.body().contains(&expected), "{} is not selected", facet);
}

#[then("no category filter should be shown")]
fn no_filter(world: &mut HostelWorld) {
    assert!(!world.body().contains(r#"id="facets""#));
}
