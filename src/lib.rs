#![cfg(target_arch = "wasm32")]
use crate::audio::MediaTrack;
use crate::constants::{
    BLOB_SELECTOR, CHIME_SRC, CONSOLE_LOG_LEVEL, PARTY_AUDIO_ID, STARFIELD_CANVAS_ID,
};
use crate::core::{
    generate_star_positions, ConveyorConfig, ConveyorState, PartyConfig, PartyController,
    PartyVisuals, StarfieldMotion, STAR_COUNT,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod decor;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

struct SharedState {
    conveyor: Rc<RefCell<ConveyorState>>,
    party: Rc<RefCell<PartyController>>,
    stars: Rc<RefCell<StarfieldMotion>>,
    party_track: Rc<RefCell<MediaTrack>>,
}

fn build_state(document: &web::Document) -> SharedState {
    let conveyor = ConveyorState::new(ConveyorConfig::default(), dom::viewport());
    let party = Rc::new(RefCell::new(PartyController::new(PartyConfig::default())));

    let party_track = MediaTrack::from_document(document, PARTY_AUDIO_ID);
    let party_len = party.clone();
    party_track.on_duration(move |secs| {
        if party_len.borrow_mut().set_track_length(secs) {
            log::info!("[audio] party track is {:.0}s", secs);
        }
    });

    SharedState {
        conveyor: Rc::new(RefCell::new(conveyor)),
        party,
        stars: Rc::new(RefCell::new(StarfieldMotion::default())),
        party_track: Rc::new(RefCell::new(party_track)),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(CONSOLE_LOG_LEVEL).ok();
    log::info!("landing-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(STARFIELD_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", STARFIELD_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    let blobs = dom::query_html_elements(&document, BLOB_SELECTOR);
    log::info!("[conveyor] {} blobs", blobs.len());

    let state = build_state(&document);
    let epoch = Instant::now();

    events::wire_pointer_handlers(events::PointerWiring {
        document: document.clone(),
        conveyor: state.conveyor.clone(),
        blobs: blobs.clone(),
        chime: Rc::new(RefCell::new(MediaTrack::from_src(CHIME_SRC))),
    });
    events::wire_controls(events::ControlWiring {
        document: document.clone(),
        conveyor: state.conveyor.clone(),
        party: state.party.clone(),
        stars: state.stars.clone(),
        party_track: state.party_track.clone(),
        epoch,
    });
    decor::wire_lane_shuffle(&document);

    // Conveyor and party mode don't need the GPU; the loop runs either way.
    let star_positions = generate_star_positions(STAR_COUNT, &mut rand::thread_rng());
    let gpu = frame::init_gpu(&canvas, &star_positions).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        conveyor: state.conveyor,
        party: state.party,
        stars: state.stars,
        party_track: state.party_track,
        blobs,
        canvas,
        gpu,
        epoch,
        placements: Vec::new(),
        applied_visuals: PartyVisuals::default(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
