//! Charcoal - a terminal character-grid drawing editor.
//!
//! Draw with a cursor and a palette of colored glyphs, flood-fill
//! regions, rubber-band lines, undo and redo, and save the picture as
//! JSON. Press `h` inside the editor for the key reference.

mod app;
mod input;
mod render;

use std::error::Error;

use app::App;

fn main() -> Result<(), Box<dyn Error>> {
    // Quiet by default; RUST_LOG=debug for verbose output. Messages go
    // to stderr, which the alternate screen hides until exit.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::debug!("starting charcoal");
    let mut app = App::new()?;
    app.run()?;
    log::debug!("charcoal exited");
    Ok(())
}
