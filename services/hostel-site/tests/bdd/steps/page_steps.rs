//! BDD step definitions shared by every page feature

use cucumber::{given, then, when};

use hostel_content::CategoryMatching;
use hostel_site::pages::CONTENT_UNAVAILABLE;

use crate::world::HostelWorld;

fn collection_id(name: &str) -> &'static str {
    match name {
        "gallery" => "galleryimages",
        "facilities" => "hostelfacilities",
        "rooms" => "roomtypes",
        other => panic!("Unknown collection: {}", other),
    }
}

#[given(expr = "the {word} collection is unavailable")]
fn collection_unavailable(world: &mut HostelWorld, name: String) {
    world.store.failing.insert(collection_id(&name));
}

#[given("categories are matched ignoring case and surrounding spaces")]
fn normalized_matching(world: &mut HostelWorld) {
    world.config.catalog.category_matching = CategoryMatching::Normalized;
}

#[when(expr = "the page {string} is requested")]
async fn page_requested(world: &mut HostelWorld, path: String) {
    world.get(&path).await;
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut HostelWorld, status: u16) {
    assert_eq!(world.response_status, Some(status));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut HostelWorld, expected: String) {
    let body = world.body();
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the response should not contain {string}")]
fn response_not_contains(world: &mut HostelWorld, unexpected: String) {
    let body = world.body();
    assert!(
        !body.contains(&unexpected),
        "Expected response not to contain '{}'.\nResponse body:\n{}",
        unexpected,
        body
    );
}

#[then("the content failure notice should be shown")]
fn failure_notice_shown(world: &mut HostelWorld) {
    assert!(world.body().contains(CONTENT_UNAVAILABLE));
}

#[then("no content failure notice should be shown")]
fn failure_notice_absent(world: &mut HostelWorld) {
    assert!(!world.body().contains(CONTENT_UNAVAILABLE));
}

#[then(expr = "the navigation link {string} should be active")]
fn nav_link_active(world: &mut HostelWorld, path: String) {
    let expected = format!(r#"<a href="{}" class="active""#, path);
    assert!(
        world.body().contains(&expected),
        "Expected active navigation link for {}",
        path
    );
}
