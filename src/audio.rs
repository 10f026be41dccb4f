use crate::constants::{CHIME_REJECTED_LEVEL, PARTY_REJECTED_LEVEL};
use crate::core::{Playback, PlaybackError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// An `<audio>` element driven through `Playback`. A missing element turns
/// every operation into a no-op so the visuals keep running without sound.
#[derive(Clone)]
pub struct MediaTrack {
    el: Option<web::HtmlAudioElement>,
}

impl MediaTrack {
    pub fn from_document(document: &web::Document, id: &str) -> Self {
        let el = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
        if el.is_none() {
            log::warn!("[audio] missing <audio id={}>", id);
        }
        Self { el }
    }

    pub fn from_src(src: &str) -> Self {
        let el = match web::HtmlAudioElement::new_with_src(src) {
            Ok(el) => Some(el),
            Err(e) => {
                log::warn!("[audio] could not load {}: {:?}", src, e);
                None
            }
        };
        Self { el }
    }

    /// Run `f` every time playback actually starts or resumes. Registered
    /// once per element; callers make repeated starts idempotent.
    pub fn on_playing(&self, mut f: impl FnMut() + 'static) {
        let Some(el) = &self.el else {
            return;
        };
        let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("playing", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Report the media duration now if known, and again whenever metadata
    /// (re)loads.
    pub fn on_duration(&self, f: impl Fn(f64) + 'static) {
        let Some(el) = &self.el else {
            return;
        };
        let d = el.duration();
        if d.is_finite() {
            f(d);
        }
        let el_cb = el.clone();
        let closure = Closure::wrap(Box::new(move || f(el_cb.duration())) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("loadedmetadata", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Fire-and-forget restart, used for the hover chime.
    pub fn retrigger(&mut self) {
        self.rewind();
        if let Err(e) = self.request_play(CHIME_REJECTED_LEVEL) {
            log::debug!("[audio] chime skipped: {}", e);
        }
    }

    /// Ask the element to play. A rejection of the returned promise is
    /// reported at `rejected_level`.
    fn request_play(&self, rejected_level: log::Level) -> Result<(), PlaybackError> {
        let el = self.el.as_ref().ok_or(PlaybackError::Unavailable)?;
        let promise: js_sys::Promise = el
            .play()
            .map_err(|e| PlaybackError::Rejected(format!("{:?}", e)))?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::log!(rejected_level, "[audio] play() rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn seekable_covers(el: &web::HtmlAudioElement, position_sec: f64) -> bool {
        let ranges = el.seekable();
        (0..ranges.length()).any(|i| {
            let start = ranges.start(i).unwrap_or(f64::INFINITY);
            let end = ranges.end(i).unwrap_or(f64::NEG_INFINITY);
            position_sec >= start && position_sec <= end
        })
    }
}

impl Playback for MediaTrack {
    fn pause(&mut self) {
        if let Some(el) = &self.el {
            _ = el.pause();
        }
    }

    fn rewind(&mut self) {
        if let Some(el) = &self.el {
            el.set_current_time(0.0);
        }
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        // autoplay denial arrives as a rejected promise; nothing to recover
        self.request_play(PARTY_REJECTED_LEVEL)
    }

    fn seek(&mut self, position_sec: f64) -> Result<(), PlaybackError> {
        let el = self.el.as_ref().ok_or(PlaybackError::Unavailable)?;
        if !Self::seekable_covers(el, position_sec) {
            return Err(PlaybackError::SeekUnsupported);
        }
        el.set_current_time(position_sec);
        Ok(())
    }
}
