mod app;
mod charts;
mod dataset;
mod interaction;
mod message;
mod screens;
mod theme;
mod transform;

use app::App;
use iced::Settings;
use lucide_icons::LUCIDE_FONT_BYTES;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    tracing::info!("starting FIFA player stats dashboard");

    iced::application(App::new, App::update, App::view)
        .theme(App::theme)
        .settings(Settings {
            fonts: vec![LUCIDE_FONT_BYTES.into()],
            ..Default::default()
        })
        .window_size((1180.0, 820.0))
        .run()
}
