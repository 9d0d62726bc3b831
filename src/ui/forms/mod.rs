//! Form rendering module
//!
//! - `field_renderer`: single input field with error line
//! - `contact_form`: the contact form card and submitted-data panel

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact;
