use raylib::prelude::*;
use crate::constants::SWIPE_THRESHOLD;
use crate::controller::Action;
use crate::controls::Controls;
use crate::state::PointerState;

pub fn key_action(key: KeyboardKey) -> Option<Action> {
    match key {
        KeyboardKey::KEY_RIGHT => Some(Action::Next),
        KeyboardKey::KEY_LEFT => Some(Action::Prev),
        _ => None,
    }
}

/// Classifies a finished horizontal gesture. Distances at or under the threshold are taps.
pub fn swipe_action(start_x: f32, end_x: f32) -> Option<Action> {
    let distance = start_x - end_x;
    if distance.abs() <= SWIPE_THRESHOLD {
        None
    } else if distance > 0.0 {
        Some(Action::Next)
    } else {
        Some(Action::Prev)
    }
}

#[derive(Debug, Default, Clone)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn end(&mut self, x: f32) -> Option<Action> {
        let start_x = self.start_x.take()?;
        swipe_action(start_x, x)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Turns press/release pairs into button clicks or swipes.
#[derive(Debug, Clone)]
pub struct PointerInput {
    state: PointerState,
    swipe: SwipeTracker,
}

impl PointerInput {
    pub fn new() -> Self {
        Self {
            state: PointerState::Idle,
            swipe: SwipeTracker::default(),
        }
    }

    pub fn press(&mut self, point: Vector2, controls: &Controls) {
        match controls.hit(point) {
            Some(target) => {
                self.swipe.cancel();
                self.state = PointerState::Pressing(target);
            }
            None => {
                self.swipe.begin(point.x);
                self.state = PointerState::Swiping;
            }
        }
    }

    pub fn release(&mut self, point: Vector2, controls: &Controls) -> Option<Action> {
        let state = std::mem::replace(&mut self.state, PointerState::Idle);
        match state {
            // A click only counts when released over the control it started on
            PointerState::Pressing(target) => {
                (controls.hit(point) == Some(target)).then(|| target.action())
            }
            PointerState::Swiping => self.swipe.end(point.x),
            PointerState::Idle => None,
        }
    }
}

/// Polls raylib for this frame's navigation requests, keys first.
pub fn poll(rl: &RaylibHandle, pointer: &mut PointerInput, controls: &Controls) -> Vec<Action> {
    let mut actions = Vec::new();

    for key in [KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_LEFT] {
        if rl.is_key_pressed(key) {
            actions.extend(key_action(key));
        }
    }

    // Touch input is reported through the mouse on every platform raylib supports
    let position = rl.get_mouse_position();
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        pointer.press(position, controls);
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        actions.extend(pointer.release(position, controls));
    }

    actions
}
