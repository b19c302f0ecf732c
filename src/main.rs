//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

mod app;
mod net;
mod panels;
mod series;
mod state;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    app::run()
}
