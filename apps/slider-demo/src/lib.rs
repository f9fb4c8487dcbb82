//! Scripted scale slider session: lay the strip out, replay taps and a
//! drag sweep, report every selection change.

use anyhow::{Context, Result};
use clap::Parser;
use scale_slider_core::{Configuration, PointerEvent, ScaleSlider, SliderOptions};
use scale_slider_graphics::Rect;
use scale_slider_layout::{SlotStrip, DEFAULT_GLYPH_WIDTH};
use std::cell::RefCell;
use std::rc::Rc;

const SLIDER_HEIGHT: f32 = 50.0;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Smallest scale value
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub min: i64,

    /// Largest scale value
    #[arg(long, default_value_t = 5, allow_hyphen_values = true)]
    pub max: i64,

    /// Distance between neighboring values
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub interval: i64,

    /// Initially selected value; defaults to the minimum
    #[arg(long, allow_hyphen_values = true)]
    pub default: Option<i64>,

    /// Slider width in logical pixels
    #[arg(long, default_value_t = 335.0)]
    pub width: f32,

    /// X coordinates to tap, in order
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub tap: Vec<f32>,

    /// Pointer samples in the drag sweep (0 disables it)
    #[arg(long, default_value_t = 48)]
    pub drag_steps: usize,

    /// Disable handle animation
    #[arg(long, default_value_t = false)]
    pub no_animation: bool,
}

/// Runs the scripted session and returns the label reported by every
/// selection change, in order.
pub fn run(args: &Args) -> Result<Vec<String>> {
    let configuration = Configuration::new(args.min, args.max, args.interval, args.default)
        .context("invalid slider configuration")?;

    let mut options = SliderOptions::default();
    if args.no_animation {
        options = options.without_animation();
    }
    let mut slider = ScaleSlider::with_options(configuration, options);
    log::info!(
        "scale {}..={} step {}: {} points, selected {}",
        args.min,
        args.max,
        args.interval,
        slider.points().len(),
        slider.selected_point().label()
    );

    let reported = Rc::new(RefCell::new(Vec::new()));
    let sink = reported.clone();
    slider.on_value_changed(move |selection| {
        let label = selection.selected_point().label().to_string();
        println!("{label}");
        sink.borrow_mut().push(label);
    });
    slider.on_handle_request(|request| match request.animation {
        Some(duration) => log::info!("handle -> {:.1} over {duration:?}", request.x),
        None => log::info!("handle -> {:.1}", request.x),
    });

    let strip = SlotStrip::for_points(slider.points(), DEFAULT_GLYPH_WIDTH);
    slider.on_bounds_changed(Rect::new(0.0, 0.0, args.width, SLIDER_HEIGHT));
    if !slider.run_pending(&strip) {
        anyhow::bail!("slider width {} leaves no room for the scale", args.width);
    }

    for &x in &args.tap {
        let outcome = slider.dispatch_pointer(&PointerEvent::down(x));
        slider.dispatch_pointer(&PointerEvent::up(x));
        log::debug!("tap at {x}: {outcome:?}");
    }

    if args.drag_steps > 0 {
        let edges = slider
            .geometry()
            .map(|geometry| geometry.edges())
            .unwrap_or_default();
        if let (Some(&start), Some(&end)) = (edges.first(), edges.last()) {
            sweep(&mut slider, start, end, args.drag_steps);
            sweep(&mut slider, end, start, args.drag_steps);
        }
    }

    let labels = reported.borrow().clone();
    Ok(labels)
}

fn sweep(slider: &mut ScaleSlider, from: f32, to: f32, steps: usize) {
    slider.dispatch_pointer(&PointerEvent::down(from));
    for step in 1..=steps {
        let x = from + (to - from) * step as f32 / steps as f32;
        slider.dispatch_pointer(&PointerEvent::moved(x));
    }
    slider.dispatch_pointer(&PointerEvent::up(to));
}
