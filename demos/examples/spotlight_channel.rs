// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight with a render thread and a persistent store.
//!
//! The dispatcher sends requests over an `mpsc` channel to a stand-in renderer
//! thread and records shown keys in a JSON file. Run it twice: the second run
//! finds the key already shown. Pass `--reset` to clear it.
//!
//! Run:
//! - `cargo run -p understory_demos --example spotlight_channel`
//! - `cargo run -p understory_demos --example spotlight_channel -- --reset`
//! - `UNDERSTORY_SPOTLIGHT_STORE=/tmp/shown.json cargo run -p understory_demos --example spotlight_channel`

use std::sync::mpsc;
use std::thread;

use kurbo::Rect;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use understory_focus_shape::DisplayDensity;
use understory_spotlight::{
    Dispatcher, JsonFileStore, PresentationRequest, SequenceBuilder, StaticHost,
};

const KEY: &str = "channel_demo";

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = JsonFileStore::open_default();
    info!(path = %store.path().display(), "using shown-state file");

    let (tx, rx) = mpsc::channel::<PresentationRequest>();
    let renderer = thread::spawn(move || {
        for request in rx {
            info!(key = %request.key, steps = request.steps.len(), "renderer received");
            for step in &request.steps {
                info!(title = step.title(), focus = ?step.focus(), "rendering step");
            }
        }
    });

    let mut dispatcher = Dispatcher::new(store, tx);
    if std::env::args().any(|a| a == "--reset") {
        dispatcher.gate_mut().reset(KEY);
    }

    let host = StaticHost {
        density: DisplayDensity::XHDPI,
        ..Default::default()
    };
    let sequence = SequenceBuilder::new()
        .context(&host)
        .key(KEY)
        .target(Rect::new(16.0, 16.0, 64.0, 64.0))
        .title("Menu")
        .text("Open the navigation drawer.")
        .add()
        .target(Rect::new(300.0, 16.0, 344.0, 64.0))
        .title("Profile")
        .add()
        .build()?;
    let outcome = sequence.show(&mut dispatcher);
    info!(?outcome, "dispatch finished");

    // Dropping the dispatcher closes the channel and lets the renderer exit.
    drop(dispatcher);
    renderer
        .join()
        .map_err(|_| anyhow::anyhow!("renderer thread panicked"))?;
    Ok(())
}
