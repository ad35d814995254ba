mod actions;
mod app;
mod collections;
mod config;
mod editor;
mod error;
mod history;
mod logging;
mod request;
mod response;
mod state;
mod types;
mod ui;

use app::App;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    logging::init(&config)?;

    let terminal = ratatui::init();
    let app_result = App::new(config).run(terminal).await;
    ratatui::restore();
    app_result
}
