//! Showcase - Role rotator and glitch wave side by side
//!
//! Runs both effects on their own elements for a few seconds, drawing through
//! the inline presenter, then stops the wave and exits cleanly.
//!
//! Run with: cargo run --example showcase

use std::io::stdout;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor;
use crossterm::execute;

use glitch_tui::{
    InlinePresenter, RotatorOptions, TextElement, WaveOptions, create_glitch_wave,
    init_role_rotator_with, prefers_reduced_motion,
};

fn main() -> std::io::Result<()> {
    let title = TextElement::new("");
    let role = TextElement::new("");

    let reduced_motion = prefers_reduced_motion();

    init_role_rotator_with(
        &role,
        &["FILM DIRECTOR", "WRITER", "CREATIVE DIRECTOR"],
        RotatorOptions {
            initial_delay: Duration::from_millis(500),
            reduced_motion,
            ..Default::default()
        },
    );

    let stop_wave = if reduced_motion {
        title.set_text("GLITCH TUI");
        None
    } else {
        Some(create_glitch_wave(&title, "GLITCH TUI", WaveOptions::default()))
    };

    let mut presenter = InlinePresenter::new().with_max_width(60);
    presenter.push(&title);
    presenter.push(&role);

    let mut out = stdout();
    execute!(out, cursor::Hide)?;

    let started = Instant::now();
    while started.elapsed() < Duration::from_secs(12) {
        presenter.draw(&mut out)?;
        thread::sleep(Duration::from_millis(33));
    }

    if let Some(stop) = stop_wave {
        stop();
    }
    presenter.draw(&mut out)?;
    execute!(out, cursor::Show)?;
    Ok(())
}
