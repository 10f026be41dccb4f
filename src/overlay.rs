use crate::constants::{
    GLITCH_CLASS, MESSAGE_SHOW_CLASS, PARTY_MESSAGE_ID, STOP_BUTTON_ID, STOP_VISIBLE_CLASS,
};
use crate::core::PartyVisuals;
use crate::dom;
use web_sys as web;

/// Mirror party flags onto the message, stop button and body classes.
pub fn apply_party(document: &web::Document, visuals: PartyVisuals) {
    if let Some(el) = document.get_element_by_id(PARTY_MESSAGE_ID) {
        dom::set_class(&el, MESSAGE_SHOW_CLASS, visuals.message);
    }
    if let Some(el) = document.get_element_by_id(STOP_BUTTON_ID) {
        dom::set_class(&el, STOP_VISIBLE_CLASS, visuals.stop_button);
    }
    if let Some(body) = document.body() {
        dom::set_class(&body, GLITCH_CLASS, visuals.glitch);
    }
}
