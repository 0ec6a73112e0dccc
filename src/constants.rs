pub const DEFAULT_WIDTH: i32 = 1280;          // Default window width
pub const DEFAULT_HEIGHT: i32 = 720;          // Default window height
pub const DEFAULT_FPS: u32 = 60;              // Default frames per second

pub const TRANSITION_DURATION: f32 = 0.5;     // Track slide duration (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal swipe distance (pixels)
pub const SLIDE_FILL: f32 = 0.9;              // Fraction of the viewport a slide may cover

pub const BUTTON_SIZE: f32 = 56.0;            // Prev/next button edge length (pixels)
pub const BUTTON_MARGIN: f32 = 24.0;          // Distance between buttons and viewport edge
pub const DOT_RADIUS: f32 = 7.0;              // Indicator dot radius
pub const DOT_SPACING: f32 = 26.0;            // Distance between indicator dot centers
pub const DOT_MARGIN: f32 = 30.0;             // Distance between dots and viewport bottom
