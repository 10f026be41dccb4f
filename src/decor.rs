use crate::constants::{FLOATIE_SELECTOR, KANDI_SELECTOR};
use crate::core::{shuffle_lanes, FLOATIE_LANES, KANDI_LANES, LANE_SHUFFLE_INTERVAL_MS};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn assign_lanes(document: &web::Document, selector: &str, lanes: &[&'static str]) {
    let shuffled = shuffle_lanes(lanes, &mut rand::thread_rng());
    // extra elements beyond the lane count keep their CSS position
    for (el, lane) in dom::query_html_elements(document, selector)
        .iter()
        .zip(shuffled)
    {
        dom::set_style(el, "left", lane);
    }
}

pub fn randomize_floatie_positions(document: &web::Document) {
    assign_lanes(document, FLOATIE_SELECTOR, &FLOATIE_LANES);
    assign_lanes(document, KANDI_SELECTOR, &KANDI_LANES);
}

/// Shuffle once now, then on a slow interval.
pub fn wire_lane_shuffle(document: &web::Document) {
    randomize_floatie_positions(document);
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        randomize_floatie_positions(&doc);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            LANE_SHUFFLE_INTERVAL_MS,
        );
    }
    closure.forget();
}
