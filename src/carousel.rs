use raylib::prelude::*;
use crate::controller::{Action, SlideController};
use crate::controls::Controls;
use crate::slide::Slide;
use crate::track::TrackAnimation;
use anyhow::Result;
use log::debug;

/// Counts down to the next automatic advance. Any navigation restarts it.
pub struct Autoplay {
    interval: f32,
    timer: f32,
}

impl Autoplay {
    pub fn new(interval: f32) -> Self {
        Self { interval, timer: 0.0 }
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.timer >= self.interval {
            self.timer = 0.0;
            return true;
        }
        false
    }
}

pub struct Carousel<S> {
    slides: Vec<S>,
    controller: SlideController,
    track: TrackAnimation,
    autoplay: Option<Autoplay>,
}

impl<S> Carousel<S> {
    pub fn new(slides: Vec<S>, autoplay: Option<Autoplay>) -> Result<Self> {
        let controller = SlideController::new(slides.len())?;
        let track = TrackAnimation::new(controller.render());
        Ok(Self { slides, controller, track, autoplay })
    }

    /// Jumps to `index` without a transition. Out-of-range indexes are ignored.
    pub fn start_at(&mut self, index: usize) -> bool {
        if !self.controller.go_to(index) {
            return false;
        }
        self.track = TrackAnimation::new(self.controller.render());
        true
    }

    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn handle(&mut self, action: Action) {
        let before = self.controller.current_index();
        self.controller.apply(action);
        self.track.retarget(self.controller.render());
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.reset();
        }
        debug!("{:?}: slide {} -> {}", action, before, self.controller.current_index());
    }

    pub fn update(&mut self, dt: f32) {
        self.track.update(dt);
        let advance = self.autoplay.as_mut().is_some_and(|autoplay| autoplay.tick(dt));
        if advance {
            self.handle(Action::Next);
        }
    }

    /// Slides overlapping the viewport, with the x position of their slot.
    pub fn visible_slots(&self, viewport_width: f32) -> Vec<(usize, f32)> {
        let track_x = self.track.to_pixels(viewport_width);
        (0..self.slides.len())
            .map(|i| (i, i as f32 * viewport_width + track_x))
            .filter(|(_, x)| *x > -viewport_width && *x < viewport_width)
            .collect()
    }
}

impl Carousel<Slide> {
    pub fn draw(&self, d: &mut RaylibDrawHandle, controls: &Controls, width: f32, height: f32) {
        for (i, x) in self.visible_slots(width) {
            self.slides[i].draw(d, x, width, height);
        }
        controls.draw(d, self.current_index());
    }

    pub fn current_name(&self) -> &str {
        &self.slides[self.current_index()].name
    }
}
