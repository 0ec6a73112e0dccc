use raylib::prelude::*;
use crate::constants::*;
use crate::controller::Action;

/// Something on screen that can be clicked.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Target {
    Prev,
    Next,
    Dot(usize),
}

impl Target {
    pub fn action(self) -> Action {
        match self {
            Target::Prev => Action::Prev,
            Target::Next => Action::Next,
            Target::Dot(index) => Action::GoTo(index),
        }
    }
}

/// Screen placement of the prev/next buttons and the indicator dots.
#[derive(Debug, Clone)]
pub struct Controls {
    prev: Rectangle,
    next: Rectangle,
    dots: Vec<Vector2>,
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

impl Controls {
    pub fn layout(width: f32, height: f32, slide_count: usize) -> Self {
        let button_y = (height - BUTTON_SIZE) * 0.5;
        let prev = Rectangle::new(BUTTON_MARGIN, button_y, BUTTON_SIZE, BUTTON_SIZE);
        let next = Rectangle::new(width - BUTTON_MARGIN - BUTTON_SIZE, button_y, BUTTON_SIZE, BUTTON_SIZE);

        // Dots are centered horizontally along the bottom edge
        let row_width = DOT_SPACING * slide_count.saturating_sub(1) as f32;
        let first_x = (width - row_width) * 0.5;
        let dots = (0..slide_count)
            .map(|i| Vector2::new(first_x + DOT_SPACING * i as f32, height - DOT_MARGIN))
            .collect();

        Self { prev, next, dots }
    }

    pub fn hit(&self, point: Vector2) -> Option<Target> {
        if contains(&self.prev, point) {
            return Some(Target::Prev);
        }
        if contains(&self.next, point) {
            return Some(Target::Next);
        }
        // Generous hit radius, dots are small
        let reach = DOT_RADIUS * 1.6;
        self.dots
            .iter()
            .position(|dot| (dot.x - point.x).hypot(dot.y - point.y) <= reach)
            .map(Target::Dot)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, current: usize) {
        let fill = Color::new(0, 0, 0, 140);
        let glyph = Color::new(240, 240, 240, 255);

        d.draw_rectangle_rounded(self.prev, 0.3, 8, fill);
        d.draw_rectangle_rounded(self.next, 0.3, 8, fill);

        let (cx, cy) = (self.prev.x + BUTTON_SIZE * 0.5, self.prev.y + BUTTON_SIZE * 0.5);
        d.draw_triangle(
            Vector2::new(cx + 8.0, cy - 12.0),
            Vector2::new(cx - 10.0, cy),
            Vector2::new(cx + 8.0, cy + 12.0),
            glyph,
        );
        let (cx, cy) = (self.next.x + BUTTON_SIZE * 0.5, self.next.y + BUTTON_SIZE * 0.5);
        d.draw_triangle(
            Vector2::new(cx - 8.0, cy - 12.0),
            Vector2::new(cx - 8.0, cy + 12.0),
            Vector2::new(cx + 10.0, cy),
            glyph,
        );

        for (i, dot) in self.dots.iter().enumerate() {
            let color = if i == current { glyph } else { Color::new(240, 240, 240, 90) };
            d.draw_circle_v(*dot, DOT_RADIUS, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_sit_at_the_viewport_edges() {
        let controls = Controls::layout(800.0, 600.0, 3);
        assert_eq!(controls.hit(Vector2::new(BUTTON_MARGIN + 1.0, 300.0)), Some(Target::Prev));
        assert_eq!(controls.hit(Vector2::new(800.0 - BUTTON_MARGIN - 1.0, 300.0)), Some(Target::Next));
        assert_eq!(controls.hit(Vector2::new(400.0, 300.0)), None);
    }

    #[test]
    fn dots_are_centered_and_clickable() {
        let controls = Controls::layout(800.0, 600.0, 3);
        let y = 600.0 - DOT_MARGIN;
        assert_eq!(controls.hit(Vector2::new(400.0 - DOT_SPACING, y)), Some(Target::Dot(0)));
        assert_eq!(controls.hit(Vector2::new(400.0, y)), Some(Target::Dot(1)));
        assert_eq!(controls.hit(Vector2::new(400.0 + DOT_SPACING, y + 3.0)), Some(Target::Dot(2)));
    }

    #[test]
    fn targets_map_to_actions() {
        assert_eq!(Target::Prev.action(), Action::Prev);
        assert_eq!(Target::Next.action(), Action::Next);
        assert_eq!(Target::Dot(4).action(), Action::GoTo(4));
    }
}
