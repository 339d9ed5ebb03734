//! UI layer for the deck viewer.
//!
//! This module owns all GUI state and messages. The deck itself (pages,
//! overlays, geometry) lives in `deck`; everything here folds scroll and
//! timer notifications into display state and renders widgets.

mod messages;
mod state;
mod update;
mod view;

pub use messages::Message;
pub use state::App;

use crate::config::AppConfig;
use crate::theme;
use iced::{window, Point, Size};
use std::path::PathBuf;

/// Helper to launch the viewer with the provided configuration.
pub fn run_app(config: AppConfig, assets_dir: PathBuf) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        ..window::Settings::default()
    };

    iced::application("Miti Karia — Portfolio", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| theme::app_theme(app.theme_mode()))
        .run_with(move || App::bootstrap(config, assets_dir))
}
