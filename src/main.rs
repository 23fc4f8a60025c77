//! Rustle Rating demo
//! Shows the rating widget with its default stars and with custom content

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use rustle_rating::app::App;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .antialiasing(true)
        .run()?;

    Ok(())
}
