use crate::audio::MediaTrack;
use crate::constants::{PARTY_BUTTON_ID, SHUFFLE_BUTTON_ID, STOP_BUTTON_ID};
use crate::core::{ConveyorState, PartyController, StarfieldMotion, Transition};
use crate::dom;
use crate::overlay;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub conveyor: Rc<RefCell<ConveyorState>>,
    pub party: Rc<RefCell<PartyController>>,
    pub stars: Rc<RefCell<StarfieldMotion>>,
    pub party_track: Rc<RefCell<MediaTrack>>,
    pub epoch: Instant,
}

pub fn wire_controls(w: ControlWiring) {
    let pump = DeadlinePump::new(&w);
    wire_shuffle(&w);
    wire_party_toggle(&w, &pump);
    wire_party_stop(&w, &pump);
    wire_deferred_seek(&w);
}

/// Fires party deadlines from `setTimeout`. Animation frames stop in hidden
/// tabs; timeouts keep running there, throttled.
struct DeadlinePump {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl DeadlinePump {
    fn new(w: &ControlWiring) -> Rc<Self> {
        let pump = Rc::new(Self {
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let w2 = w.clone();
        let weak: Weak<Self> = Rc::downgrade(&pump);
        *pump.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let transition = w2.party.borrow_mut().advance(
                w2.epoch.elapsed(),
                &mut w2.conveyor.borrow_mut(),
                &mut w2.stars.borrow_mut(),
                &mut *w2.party_track.borrow_mut(),
            );
            // a message fade changes visuals without a transition
            overlay::apply_party(&w2.document, w2.party.borrow().visuals());
            if transition == Transition::Deactivated {
                log::debug!("[party] deadline reached off-frame");
            }
            if let Some(pump) = weak.upgrade() {
                pump.handle.set(None);
                pump.rearm(&w2);
            }
        }) as Box<dyn FnMut()>));
        pump
    }

    /// Replace any pending timeout with one for the controller's next
    /// deadline. Nothing is armed while the party is idle.
    fn rearm(&self, w: &ControlWiring) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(h) = self.handle.take() {
            window.clear_timeout_with_handle(h);
        }
        let Some(deadline) = w.party.borrow().next_deadline() else {
            return;
        };
        let delay = deadline.saturating_sub(w.epoch.elapsed());
        let delay_ms = (delay.as_secs_f64() * 1000.0).ceil().min(i32::MAX as f64) as i32;
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(h) => self.handle.set(Some(h)),
            Err(e) => log::warn!("[party] could not arm deadline timeout: {:?}", e),
        }
    }
}

fn wire_shuffle(w: &ControlWiring) {
    let conveyor = w.conveyor.clone();
    dom::add_click_listener(&w.document, SHUFFLE_BUTTON_ID, move || {
        conveyor
            .borrow_mut()
            .shuffle(dom::viewport(), &mut rand::thread_rng());
    });
}

fn wire_party_toggle(w: &ControlWiring, pump: &Rc<DeadlinePump>) {
    let w2 = w.clone();
    let pump = pump.clone();
    dom::add_click_listener(&w.document, PARTY_BUTTON_ID, move || {
        let transition = w2.party.borrow_mut().toggle(
            w2.epoch.elapsed(),
            &mut w2.conveyor.borrow_mut(),
            &mut w2.stars.borrow_mut(),
            &mut *w2.party_track.borrow_mut(),
            &mut rand::thread_rng(),
        );
        after_transition(&w2, transition);
        pump.rearm(&w2);
    });
}

fn wire_party_stop(w: &ControlWiring, pump: &Rc<DeadlinePump>) {
    let w2 = w.clone();
    let pump = pump.clone();
    dom::add_click_listener(&w.document, STOP_BUTTON_ID, move || {
        let transition = w2.party.borrow_mut().stop(
            &mut w2.conveyor.borrow_mut(),
            &mut w2.stars.borrow_mut(),
            &mut *w2.party_track.borrow_mut(),
        );
        after_transition(&w2, transition);
        pump.rearm(&w2);
    });
}

/// Seeking before playback has started is unreliable, so the random start is
/// applied from the `playing` event. The controller hands out a pending seek
/// at most once, so later `playing` events (resume after a stall) do nothing.
fn wire_deferred_seek(w: &ControlWiring) {
    let party = w.party.clone();
    let track = w.party_track.clone();
    w.party_track.borrow().on_playing(move || {
        let seeked = party
            .borrow_mut()
            .on_playback_started(&mut *track.borrow_mut());
        if let Some(pos) = seeked {
            log::info!("[party] track seeked to {:.1}s", pos);
        }
    });
}

fn after_transition(w: &ControlWiring, transition: Transition) {
    if transition != Transition::Unchanged {
        overlay::apply_party(&w.document, w.party.borrow().visuals());
    }
}
