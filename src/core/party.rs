use super::constants::{
    MESSAGE_DURATION_SEC, PARTY_BOOST, PARTY_DURATION_SEC, PARTY_SPEED, TRACK_LENGTH_SEC,
};
use super::conveyor::ConveyorState;
use super::starfield::StarfieldMotion;
use super::timers::{TimerKind, TimerTable};
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("seek unsupported")]
    SeekUnsupported,
    #[error("media unavailable")]
    Unavailable,
}

/// The party track as seen by the controller. Implementations must not block;
/// `play` only has to *request* playback, and the host reports the actual
/// start through `PartyController::on_playback_started`.
pub trait Playback {
    fn pause(&mut self);
    fn rewind(&mut self);
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn seek(&mut self, position_sec: f64) -> Result<(), PlaybackError>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartyConfig {
    pub speed: f64,
    pub boost: f32,
    pub duration: Duration,
    pub message_duration: Duration,
    pub track_length_sec: f64,
}

impl Default for PartyConfig {
    fn default() -> Self {
        Self {
            speed: PARTY_SPEED,
            boost: PARTY_BOOST,
            duration: Duration::from_secs_f64(PARTY_DURATION_SEC),
            message_duration: Duration::from_secs_f64(MESSAGE_DURATION_SEC),
            track_length_sec: TRACK_LENGTH_SEC,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyPhase {
    Idle,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Activated,
    Deactivated,
    Unchanged,
}

/// DOM-facing flags; the web layer mirrors these onto classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartyVisuals {
    pub message: bool,
    pub glitch: bool,
    pub stop_button: bool,
}

impl PartyVisuals {
    const PARTYING: Self = Self {
        message: true,
        glitch: true,
        stop_button: true,
    };
}

pub struct PartyController {
    config: PartyConfig,
    phase: PartyPhase,
    saved_speed: f64,
    timers: TimerTable,
    pending_seek: Option<f64>,
    visuals: PartyVisuals,
}

impl PartyController {
    pub fn new(config: PartyConfig) -> Self {
        Self {
            config,
            phase: PartyPhase::Idle,
            saved_speed: 0.0,
            timers: TimerTable::default(),
            pending_seek: None,
            visuals: PartyVisuals::default(),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == PartyPhase::Active
    }

    #[inline]
    pub fn visuals(&self) -> PartyVisuals {
        self.visuals
    }

    /// Earliest pending party deadline. The web layer arms a timeout for it
    /// so the party still ends while frames are suspended.
    #[inline]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Adopt the real media duration once it is known. Durations that leave no
    /// room for a full party are ignored.
    pub fn set_track_length(&mut self, seconds: f64) -> bool {
        if seconds.is_finite() && seconds > self.config.duration.as_secs_f64() {
            self.config.track_length_sec = seconds;
            true
        } else {
            false
        }
    }

    /// Latest start position that still leaves a full party's worth of audio.
    #[inline]
    pub fn max_seek_start(&self) -> f64 {
        (self.config.track_length_sec - self.config.duration.as_secs_f64()).max(0.0)
    }

    /// Idle -> Active. Must run inside the input handler that triggered it so
    /// `play` satisfies the browser's gesture requirement.
    pub fn start<P: Playback + ?Sized, R: Rng>(
        &mut self,
        now: Duration,
        conveyor: &mut ConveyorState,
        stars: &mut StarfieldMotion,
        audio: &mut P,
        rng: &mut R,
    ) -> Transition {
        if self.is_active() {
            return Transition::Unchanged;
        }
        self.phase = PartyPhase::Active;
        self.saved_speed = conveyor.speed;
        conveyor.speed = self.config.speed;
        stars.boost = self.config.boost;
        self.visuals = PartyVisuals::PARTYING;
        self.pending_seek = self.begin_playback(audio, rng);
        self.timers.arm(TimerKind::Deactivate, now, self.config.duration);
        self.timers
            .arm(TimerKind::MessageFade, now, self.config.message_duration);
        log::info!(
            "[party] activated saved_speed={:.2} seek={:?}",
            self.saved_speed,
            self.pending_seek
        );
        Transition::Activated
    }

    pub fn stop<P: Playback + ?Sized>(
        &mut self,
        conveyor: &mut ConveyorState,
        stars: &mut StarfieldMotion,
        audio: &mut P,
    ) -> Transition {
        if !self.is_active() {
            return Transition::Unchanged;
        }
        self.deactivate(conveyor, stars, audio);
        log::info!("[party] stopped");
        Transition::Deactivated
    }

    pub fn toggle<P: Playback + ?Sized, R: Rng>(
        &mut self,
        now: Duration,
        conveyor: &mut ConveyorState,
        stars: &mut StarfieldMotion,
        audio: &mut P,
        rng: &mut R,
    ) -> Transition {
        if self.is_active() {
            self.stop(conveyor, stars, audio)
        } else {
            self.start(now, conveyor, stars, audio, rng)
        }
    }

    /// Fire every timer due at `now`. Called from the frame loop and from the
    /// deadline timeout; a call with nothing due is a no-op.
    pub fn advance<P: Playback + ?Sized>(
        &mut self,
        now: Duration,
        conveyor: &mut ConveyorState,
        stars: &mut StarfieldMotion,
        audio: &mut P,
    ) -> Transition {
        let mut transition = Transition::Unchanged;
        for kind in self.timers.take_due(now) {
            if !self.is_active() {
                continue;
            }
            match kind {
                TimerKind::MessageFade => self.visuals.message = false,
                TimerKind::Deactivate => {
                    self.deactivate(conveyor, stars, audio);
                    log::info!("[party] ran its course");
                    transition = Transition::Deactivated;
                }
            }
        }
        transition
    }

    /// Playback has actually begun; perform the deferred random seek. Returns
    /// the position seeked to, or `None` if nothing was pending or the seek
    /// failed (playback then carries on from the top of the track).
    pub fn on_playback_started<P: Playback + ?Sized>(&mut self, audio: &mut P) -> Option<f64> {
        if !self.is_active() {
            return None;
        }
        let position = self.pending_seek.take()?;
        match audio.seek(position) {
            Ok(()) => Some(position),
            Err(e) => {
                log::warn!("[party] seek to {:.1}s failed, playing from the top: {}", position, e);
                None
            }
        }
    }

    fn begin_playback<P: Playback + ?Sized, R: Rng>(
        &self,
        audio: &mut P,
        rng: &mut R,
    ) -> Option<f64> {
        audio.pause();
        audio.rewind();
        let max_start = self.max_seek_start();
        let start_at = if max_start > 0.0 {
            rng.gen_range(0.0..max_start)
        } else {
            0.0
        };
        match audio.play() {
            Ok(()) => (start_at > 0.0).then_some(start_at),
            Err(e) => {
                log::warn!("[party] audio unavailable, partying silently: {}", e);
                None
            }
        }
    }

    fn deactivate<P: Playback + ?Sized>(
        &mut self,
        conveyor: &mut ConveyorState,
        stars: &mut StarfieldMotion,
        audio: &mut P,
    ) {
        self.phase = PartyPhase::Idle;
        self.timers.cancel_all();
        self.pending_seek = None;
        audio.pause();
        conveyor.speed = self.saved_speed;
        stars.boost = 1.0;
        self.visuals = PartyVisuals::default();
    }
}

// read by host tests
#[allow(dead_code)]
impl PartyController {
    #[inline]
    pub fn phase(&self) -> PartyPhase {
        self.phase
    }

    #[inline]
    pub fn saved_speed(&self) -> f64 {
        self.saved_speed
    }

    #[inline]
    pub fn timers(&self) -> &TimerTable {
        &self.timers
    }

    #[inline]
    pub fn pending_seek(&self) -> Option<f64> {
        self.pending_seek
    }

    #[inline]
    pub fn config(&self) -> &PartyConfig {
        &self.config
    }
}
