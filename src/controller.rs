use anyhow::{ensure, Result};

/// A navigation request produced by the input layer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Next,
    Prev,
    GoTo(usize),
}

/// Horizontal translation of the slide track, in percent of the viewport width.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TrackOffset(pub f32);

impl TrackOffset {
    pub fn percent(self) -> f32 {
        self.0
    }

    pub fn to_pixels(self, viewport_width: f32) -> f32 {
        self.0 / 100.0 * viewport_width
    }
}

/// Circular position over a fixed number of slides.
///
/// The index is the only mutable state; every operation keeps it inside `0..len`.
#[derive(Debug, Clone)]
pub struct SlideController {
    len: usize,
    current: usize,
}

impl SlideController {
    pub fn new(len: usize) -> Result<Self> {
        ensure!(len > 0, "a carousel needs at least one slide");
        Ok(Self { len, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jumps to `index`. Returns false and leaves the position alone when out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Next => self.next(),
            Action::Prev => self.prev(),
            Action::GoTo(index) => {
                self.go_to(index);
            }
        }
    }

    pub fn render(&self) -> TrackOffset {
        TrackOffset(-(self.current as f32) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(SlideController::new(0).is_err());
    }

    #[test]
    fn next_wraps_to_first_slide() {
        let mut controller = SlideController::new(3).unwrap();
        controller.next();
        assert_eq!(controller.current_index(), 1);
        controller.next();
        assert_eq!(controller.current_index(), 2);
        controller.next();
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn prev_wraps_to_last_slide() {
        let mut controller = SlideController::new(5).unwrap();
        controller.prev();
        assert_eq!(controller.current_index(), 4);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut controller = SlideController::new(1).unwrap();
        controller.next();
        assert_eq!(controller.current_index(), 0);
        controller.prev();
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.render(), TrackOffset(0.0));
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut controller = SlideController::new(4).unwrap();
        assert!(controller.go_to(2));
        assert!(!controller.go_to(4));
        assert_eq!(controller.current_index(), 2);
        controller.apply(Action::GoTo(9));
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn render_translates_by_whole_viewports() {
        let mut controller = SlideController::new(4).unwrap();
        controller.go_to(3);
        assert_eq!(controller.render().percent(), -300.0);
        assert_eq!(controller.render().to_pixels(800.0), -2400.0);
    }

    fn arb_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Next),
            Just(Action::Prev),
            (0usize..20).prop_map(Action::GoTo),
        ]
    }

    proptest! {
        #[test]
        fn index_stays_in_bounds(len in 1usize..16, actions in prop::collection::vec(arb_action(), 0..64)) {
            let mut controller = SlideController::new(len).unwrap();
            for action in actions {
                controller.apply(action);
                prop_assert!(controller.current_index() < len);
            }
        }

        #[test]
        fn next_then_prev_is_identity(len in 1usize..16, start in 0usize..16) {
            prop_assume!(start < len);
            let mut controller = SlideController::new(len).unwrap();
            controller.go_to(start);
            controller.next();
            controller.prev();
            prop_assert_eq!(controller.current_index(), start);
            controller.prev();
            controller.next();
            prop_assert_eq!(controller.current_index(), start);
        }
    }
}
