use super::constants::{BASE_CENTER_PERCENT, CONVEYOR_SPEED, MIN_SPACING_PX, PARALLAX_GAIN_PERCENT};
use fnv::FnvHashSet;
use rand::Rng;

/// Layout tuning for the blob conveyor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConveyorConfig {
    pub min_spacing: f64,
    pub base_center_percent: f64,
    pub parallax_gain: f64,
    pub speed: f64,
}

impl Default for ConveyorConfig {
    fn default() -> Self {
        Self {
            min_spacing: MIN_SPACING_PX,
            base_center_percent: BASE_CENTER_PERCENT,
            parallax_gain: PARALLAX_GAIN_PERCENT,
            speed: CONVEYOR_SPEED,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_usable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// Where one element lands this tick: CSS `left` in px and `top` in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub left_px: f64,
    pub top_percent: f64,
}

/// Wrap `x` into `[0, track_length)` for either sign of `x`.
#[inline]
pub fn wrap_position(x: f64, track_length: f64) -> f64 {
    ((x % track_length) + track_length) % track_length
}

#[inline]
pub fn spacing_for(viewport_width: f64, element_count: usize, min_spacing: f64) -> f64 {
    (viewport_width / element_count as f64).max(min_spacing)
}

#[inline]
pub fn parallax_percent(pointer_y: f64, viewport_height: f64, base: f64, gain: f64) -> f64 {
    base + ((pointer_y / viewport_height) - 0.5) * gain
}

pub struct ConveyorState {
    pub config: ConveyorConfig,
    pub offset: f64,
    pub speed: f64,
    pub pointer_y: f64,
    hovered: FnvHashSet<usize>,
}

impl ConveyorState {
    /// Start one viewport width to the left with the pointer centered.
    pub fn new(config: ConveyorConfig, viewport: Viewport) -> Self {
        Self {
            config,
            offset: -viewport.width,
            speed: config.speed,
            pointer_y: viewport.height / 2.0,
            hovered: FnvHashSet::default(),
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        !self.hovered.is_empty()
    }

    /// Record pointer enter/leave for one element. The conveyor stays paused
    /// while any element is hovered.
    pub fn set_hover(&mut self, index: usize, hovered: bool) {
        if hovered {
            self.hovered.insert(index);
        } else {
            self.hovered.remove(&index);
        }
    }

    #[inline]
    pub fn set_pointer_y(&mut self, y: f64) {
        self.pointer_y = y;
    }

    /// Discontinuous reposition. The next `tick` still advances by `speed`
    /// before laying out.
    pub fn jump(&mut self, offset: f64, pointer_y: f64) {
        self.offset = offset;
        self.pointer_y = pointer_y;
    }

    pub fn shuffle<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        let offset = rng.gen::<f64>() * viewport.width.max(0.0);
        let pointer_y = rng.gen::<f64>() * viewport.height.max(0.0);
        self.jump(offset, pointer_y);
    }

    /// Advance the offset (unless paused) and write one placement per element
    /// into `out`. Returns `false` when the layout pass was skipped because the
    /// viewport or element collection is empty.
    pub fn tick(&mut self, viewport: Viewport, element_count: usize, out: &mut Vec<Placement>) -> bool {
        out.clear();
        if !self.is_paused() {
            self.offset += self.speed;
        }
        if element_count == 0 || !viewport.is_usable() {
            return false;
        }

        let spacing = spacing_for(viewport.width, element_count, self.config.min_spacing);
        let track_length = spacing * element_count as f64;
        let top_percent = parallax_percent(
            self.pointer_y,
            viewport.height,
            self.config.base_center_percent,
            self.config.parallax_gain,
        );
        out.extend((0..element_count).map(|i| {
            let x = i as f64 * spacing + self.offset;
            Placement {
                left_px: wrap_position(x, track_length) - spacing,
                top_percent,
            }
        }));
        true
    }
}
