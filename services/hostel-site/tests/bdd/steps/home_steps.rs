//! BDD step definitions for the home page feature

use cucumber::{given, then, when};

use hostel_content::HostelFacility;

use crate::world::HostelWorld;

fn facility(id: String, key: bool, category: Option<String>) -> HostelFacility {
    HostelFacility {
        facility_name: Some(format!("Facility {}", id)),
        id,
        description: None,
        is_key_facility: Some(key),
        icon: None,
        category,
        availability: None,
    }
}

#[given(expr = "{int} key facilities numbered with prefix {string}")]
fn numbered_key_facilities(world: &mut HostelWorld, count: usize, prefix: String) {
    for i in 1..=count {
        world
            .store
            .facilities
            .push(facility(format!("{}{}", prefix, i), true, None));
    }
}

#[given(expr = "a key facility {string} in category {string}")]
fn key_facility(world: &mut HostelWorld, id: String, category: String) {
    world
        .store
        .facilities
        .push(facility(id, true, Some(category)));
}

#[given(expr = "an ordinary facility {string}")]
fn ordinary_facility(world: &mut HostelWorld, id: String) {
    world.store.facilities.push(facility(id, false, None));
}

#[given(expr = "the home page shows at most {int} key facilities")]
fn key_facility_limit(world: &mut HostelWorld, limit: usize) {
    world.config.catalog.key_facility_limit = limit;
}

#[when("the key facilities API is requested")]
async fn key_facilities_api(world: &mut HostelWorld) {
    world.get("/api/facilities/key").await;
}

#[then(expr = "the key facilities should be {string}")]
fn key_facilities_are(world: &mut HostelWorld, expected: String) {
    let json: Vec<serde_json::Value> = serde_json::from_str(world.body()).unwrap();
    let ids: Vec<&str> = json.iter().filter_map(|f| f["_id"].as_str()).collect();
    let expected: Vec<&str> = if expected.is_empty() {
        Vec::new()
    } else {
        expected.split(", ").collect()
    };
    assert_eq!(ids, expected);
}

#[then(expr = "the key facility {string} should use the {string} icon")]
fn key_facility_icon(world: &mut HostelWorld, id: String, icon: String) {
    let json: Vec<serde_json::Value> = serde_json::from_str(world.body()).unwrap();
    let entry = json
        .iter()
        .find(|f| f["_id"] == id.as_str())
        .unwrap_or_else(|| panic!("key facility {} not listed", id));
    assert_eq!(entry["icon"], icon.as_str());
}
