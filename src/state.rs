use crate::controls::Target;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PointerState {
    Idle,             // No button held
    Pressing(Target), // Pressed on a control, waiting for release
    Swiping,          // Pressed on the track, tracking a swipe gesture
}
