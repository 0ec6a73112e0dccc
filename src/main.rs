use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use rand::seq::SliceRandom;
use raylib::prelude::*;

mod carousel;
mod config;
mod constants;
mod controller;
mod controls;
mod input;
mod slide;
mod state;
mod texture_loader;
mod track;

use crate::carousel::{Autoplay, Carousel};
use crate::config::Args;
use crate::controls::Controls;
use crate::input::PointerInput;
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // --- Collect slide images ---
    let mut image_paths = load_sorted_image_paths(&args.dir)
        .with_context(|| format!("cannot load slides from {}", args.dir.display()))?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!("Found {} images in {}", image_paths.len(), args.dir.display());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = Vec::new();
    for path in image_paths {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => slides.push(Slide::new(texture, name)),
            Err(e) => error!("Skipping {}: {:#}", name, e),
        }
    }

    let autoplay = args.autoplay.map(Autoplay::new);
    let mut carousel = Carousel::new(slides, autoplay).context("no slide could be loaded")?;
    if args.start != 0 && !carousel.start_at(args.start) {
        warn!("Start index {} is out of range for {} slides, starting at 0", args.start, carousel.len());
    }
    info!("Showing slide {}: {}", carousel.current_index(), carousel.current_name());

    let mut pointer = PointerInput::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        let controls = Controls::layout(width, height, carousel.len());

        // --- Input ---
        let before = carousel.current_index();
        for action in input::poll(&rl, &mut pointer, &controls) {
            carousel.handle(action);
        }

        // --- Update ---
        carousel.update(rl.get_frame_time());
        if carousel.current_index() != before {
            info!("Showing slide {}: {}", carousel.current_index(), carousel.current_name());
        }

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.draw(&mut d, &controls, width, height);

        let counter = format!("{} / {}", carousel.current_index() + 1, carousel.len());
        d.draw_text(&counter, 20, 20, 20, Color::LIGHTGRAY);
    }

    Ok(())
}
