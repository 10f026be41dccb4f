use crate::audio::MediaTrack;
use crate::core::{ConveyorState, PartyController, PartyVisuals, Placement, StarfieldMotion};
use crate::dom;
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub document: web::Document,
    pub conveyor: Rc<RefCell<ConveyorState>>,
    pub party: Rc<RefCell<PartyController>>,
    pub stars: Rc<RefCell<StarfieldMotion>>,
    pub party_track: Rc<RefCell<MediaTrack>>,

    pub blobs: Vec<web::HtmlElement>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub epoch: Instant,
    pub placements: Vec<Placement>,
    pub applied_visuals: PartyVisuals,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = self.epoch.elapsed();

        // Party timers first so a deactivation restores speed before this
        // frame's conveyor step.
        {
            let mut party = self.party.borrow_mut();
            party.advance(
                now,
                &mut self.conveyor.borrow_mut(),
                &mut self.stars.borrow_mut(),
                &mut *self.party_track.borrow_mut(),
            );
            let visuals = party.visuals();
            if visuals != self.applied_visuals {
                overlay::apply_party(&self.document, visuals);
                self.applied_visuals = visuals;
            }
        }

        let viewport = dom::viewport();
        let laid_out =
            self.conveyor
                .borrow_mut()
                .tick(viewport, self.blobs.len(), &mut self.placements);
        if laid_out {
            for (blob, p) in self.blobs.iter().zip(&self.placements) {
                dom::set_style(blob, "left", &format!("{}px", p.left_px));
                dom::set_style(blob, "top", &format!("{}%", p.top_percent));
            }
        }

        let motion = {
            let mut stars = self.stars.borrow_mut();
            stars.advance();
            *stars
        };
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&motion) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    stars: &[glam::Vec3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, stars).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
