//! BDD step definitions for the contact feature

use std::time::Duration;

use cucumber::{given, then, when};

use hostel_content::contact::{ContactFields, ContactForm, FormState, MESSAGE_SENT};
use hostel_site::pages::{submit_contact, ContactOutcome};
use hostel_site::submitter::{InquirySubmitter, SimulatedSubmitter};

use crate::world::HostelWorld;

#[given(
    expr = "a contact form filled with name {string}, email {string}, phone {string} and message {string}"
)]
fn filled_form(world: &mut HostelWorld, name: String, email: String, phone: String, message: String) {
    world.contact_form = Some(ContactForm::new(ContactFields {
        name,
        email,
        phone,
        message,
    }));
}

#[when("the contact form is submitted")]
async fn form_submitted(world: &mut HostelWorld) {
    let submitter = SimulatedSubmitter::new(Duration::from_millis(10));
    assert_eq!(submitter.type_name(), "simulated");
    let form = world.contact_form.as_mut().expect("form not set");
    let outcome = submit_contact(form, &submitter).await.unwrap();
    world.contact_outcome = Some(outcome);
}

#[when(expr = "the contact page is posted with {string}")]
async fn contact_posted(world: &mut HostelWorld, body: String) {
    world.post_form("/contact", body).await;
}

#[then("the form should be idle")]
fn form_idle(world: &mut HostelWorld) {
    let form = world.contact_form.as_ref().expect("form not set");
    assert_eq!(form.state(), FormState::Idle);
}

#[then("all contact fields should be empty")]
fn fields_empty(world: &mut HostelWorld) {
    let form = world.contact_form.as_ref().expect("form not set");
    assert!(form.fields().is_empty(), "fields not cleared: {:?}", form.fields());
}

#[then("the message sent confirmation should be shown")]
fn confirmation_shown(world: &mut HostelWorld) {
    assert_eq!(
        world.contact_outcome,
        Some(ContactOutcome::Sent(MESSAGE_SENT))
    );
}

#[then(expr = "the submission should be missing {string}")]
fn submission_missing(world: &mut HostelWorld, expected: String) {
    match world.contact_outcome.as_ref().expect("no outcome") {
        ContactOutcome::Incomplete { missing, .. } => {
            let expected: Vec<&str> = expected.split(", ").collect();
            assert_eq!(missing, &expected);
        }
        other => panic!("expected incomplete submission, got {other:?}"),
    }
}

#[then(expr = "the contact field {string} should still be {string}")]
fn field_kept(world: &mut HostelWorld, field: String, value: String) {
    let form = world.contact_form.as_ref().expect("form not set");
    let fields = form.fields();
    let actual = match field.as_str() {
        "name" => &fields.name,
        "email" => &fields.email,
        "phone" => &fields.phone,
        "message" => &fields.message,
        other => panic!("Unknown contact field: {}", other),
    };
    assert_eq!(actual, &value);
}

#[then(expr = "the form on the page should keep the name {string}")]
fn page_keeps_name(world: &mut HostelWorld, name: String) {
    let expected = format!(r#"name="name" type="text" required value="{}""#, name);
    assert!(
        world.body().contains(&expected),
        "Expected the name field to keep '{}'",
        name
    );
}
