use crate::constants::TRANSITION_DURATION;
use crate::controller::TrackOffset;

/// Eases the drawn track offset toward the controller's offset.
pub struct TrackAnimation {
    offset: f32,

    start_offset: f32,
    end_offset: f32,

    animation_timer: f32,
    pub is_animating: bool,
}

impl TrackAnimation {
    pub fn new(initial: TrackOffset) -> Self {
        Self {
            offset: initial.percent(),
            start_offset: initial.percent(),
            end_offset: initial.percent(),
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    /// Starts a transition from wherever the track is drawn right now.
    pub fn retarget(&mut self, target: TrackOffset) {
        if target.percent() == self.end_offset {
            return;
        }
        self.start_offset = self.offset;
        self.end_offset = target.percent();
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / TRANSITION_DURATION).min(1.0);
        let t = 1.0 - (1.0 - t).powi(3); // easeOutCubic

        self.offset = self.start_offset + (self.end_offset - self.start_offset) * t;

        if self.animation_timer >= TRANSITION_DURATION {
            self.is_animating = false;
            self.offset = self.end_offset;
        }
    }

    pub fn offset(&self) -> TrackOffset {
        TrackOffset(self.offset)
    }

    pub fn to_pixels(&self, viewport_width: f32) -> f32 {
        self.offset().to_pixels(viewport_width)
    }
}
