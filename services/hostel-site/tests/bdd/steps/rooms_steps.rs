//! BDD step definitions for the rooms and facilities feature

use cucumber::{given, then};

use hostel_content::{HostelFacility, RoomType};

use crate::world::HostelWorld;

fn facility(name: String, category: Option<String>) -> HostelFacility {
    HostelFacility {
        id: name.to_lowercase().replace(' ', "-"),
        facility_name: Some(name),
        description: None,
        is_key_facility: Some(false),
        icon: None,
        category,
        availability: None,
    }
}

#[given(expr = "a room type {string} for {int} persons at {int} rupees per month")]
fn room_type(world: &mut HostelWorld, name: String, capacity: u32, price: u32) {
    world.store.rooms.push(RoomType {
        id: name.to_lowercase().replace(' ', "-"),
        room_name: Some(name),
        description: None,
        capacity: Some(capacity),
        monthly_price: Some(f64::from(price)),
        room_image: None,
        is_ac: Some(false),
        room_area: None,
    });
}

#[given(expr = "an AC room type {string} of {int} square feet")]
fn ac_room_type(world: &mut HostelWorld, name: String, area: u32) {
    world.store.rooms.push(RoomType {
        id: name.to_lowercase().replace(' ', "-"),
        room_name: Some(name),
        description: None,
        capacity: Some(1),
        monthly_price: None,
        room_image: None,
        is_ac: Some(true),
        room_area: Some(f64::from(area)),
    });
}

#[given(expr = "a facility {string} in category {string}")]
fn facility_in_category(world: &mut HostelWorld, name: String, category: String) {
    world
        .store
        .facilities
        .push(facility(name, Some(category)));
}

#[given(expr = "a facility {string} without a category")]
fn facility_without_category(world: &mut HostelWorld, name: String) {
    world.store.facilities.push(facility(name, None));
}

#[then(expr = "the facility groups should be {string}")]
fn facility_groups(world: &mut HostelWorld, expected: String) {
    let body = world.body();
    let section = body
        .find(r#"id="facilities""#)
        .map(|at| &body[at..])
        .expect("facilities section missing");
    let mut last = 0;
    for group in expected.split(", ") {
        let heading = format!("<h3>{}</h3>", group);
        let at = section[last..]
            .find(&heading)
            .unwrap_or_else(|| panic!("group {} missing or out of order", group));
        last += at + heading.len();
    }
    let group_count = section.matches(r#"class="card facility-group""#).count();
    assert_eq!(group_count, expected.split(", ").count());
}

#[then(expr = "the group {string} should list {string}")]
fn group_lists(world: &mut HostelWorld, group: String, facilities: String) {
    let body = world.body();
    let heading = format!("<h3>{}</h3>", group);
    let start = body
        .find(&heading)
        .unwrap_or_else(|| panic!("group {} missing", group));
    let rest = &body[start..];
    let end = rest.find("</div></div>").unwrap_or(rest.len());
    let block = &rest[..end];
    for name in facilities.split(", ") {
        assert!(
            block.contains(&format!("<h4>{}</h4>", name)),
            "group {} should list {}",
            group,
            name
        );
    }
}
