use raylib::prelude::*;
use crate::constants::SLIDE_FILL;

pub struct Slide {
    image: Texture2D,
    pub name: String,
}

/// Largest scale (never above 1.0) that fits `width`x`height` inside the fill area of the viewport.
pub fn fit_scale(width: f32, height: f32, viewport_width: f32, viewport_height: f32) -> f32 {
    let max_width = viewport_width * SLIDE_FILL;
    let max_height = viewport_height * SLIDE_FILL;
    (max_width / width).min(max_height / height).min(1.0)
}

impl Slide {
    pub fn new(image: Texture2D, name: String) -> Self {
        Self { image, name }
    }

    /// Draws the slide centered in the viewport slot starting at `slot_x`.
    pub fn draw(&self, d: &mut RaylibDrawHandle, slot_x: f32, viewport_width: f32, viewport_height: f32) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, viewport_width, viewport_height);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            slot_x + (viewport_width - scaled_width) * 0.5,
            (viewport_height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
}
