//! BDD step definitions for the hostel site

pub mod contact_steps;
pub mod gallery_steps;
pub mod home_steps;
pub mod page_steps;
pub mod rooms_steps;
