// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight basics.
//!
//! Builds a three-step tour against a static host, dispatches it twice, and
//! prints the request the renderer would receive. The second dispatch is
//! skipped by the show-once gate.
//!
//! Run:
//! - `cargo run -p understory_demos --example spotlight_basics`
//! - `LOG_LEVEL=debug cargo run -p understory_demos --example spotlight_basics`

use kurbo::Rect;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use understory_focus_shape::{DisplayDensity, FocusShape};
use understory_spotlight::{
    Argb, Dispatcher, Gravity, MemoryStore, Outcome, PresentationRequest, SequenceBuilder,
    StaticHost,
};

fn init_logging() -> anyhow::Result<()> {
    let level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let host = StaticHost {
        density: DisplayDensity::XXHDPI,
        ..Default::default()
    };
    let mut dispatcher = Dispatcher::new(MemoryStore::new(), Vec::<PresentationRequest>::new());

    let tour = || {
        SequenceBuilder::new()
            .context(&host)
            .key("main_screen")
            // Step 1: circle around the search button.
            .target(Rect::new(960.0, 48.0, 1040.0, 128.0))
            .title("Search")
            .text("Find anything from here.")
            .background_alpha(180)
            .gravity(Gravity::LEFT | Gravity::BOTTOM)
            .use_gravity(true)
            .add()
            // Step 2: rounded rectangle around the toolbar. Texts and colors carry over.
            .target(Rect::new(0.0, 1800.0, 1080.0, 1920.0))
            .title("Toolbar")
            .rounded_rectangle()
            .margin(4.0)
            .focus_area_color(Argb::WHITE.with_alpha(32))
            .add()
            // Step 3: plain rectangle, explicit offset placement.
            .target(Rect::new(40.0, 400.0, 1040.0, 800.0))
            .title("Feed")
            .text("Your latest items.")
            .rectangle()
            .use_gravity(false)
            .description_delta_y(-120.0)
            .move_buttons_visibility(true)
            .add()
            .build()
    };

    let outcome = dispatcher.dispatch(tour()?);
    info!(?outcome, "first dispatch");
    let again = dispatcher.dispatch(tour()?);
    info!(outcome = ?again, "second dispatch");
    assert_eq!(again, Outcome::AlreadyShown, "gate must skip a shown key");

    for request in dispatcher.sink() {
        for (i, step) in request.steps.iter().enumerate() {
            let shape = match step.focus() {
                FocusShape::Circle(c) => format!(
                    "circle at ({:.1}, {:.1}) r={:.1}",
                    c.center.x, c.center.y, c.radius
                ),
                FocusShape::Rectangle(r) => format!("rect {r:?}"),
                FocusShape::RoundedRectangle(r) => format!("rounded rect {r:?}"),
            };
            println!("step {i}: {:<8} {shape} {:?}", step.title(), step.placement());
        }
        println!("{}", request.to_json()?);
    }
    Ok(())
}
