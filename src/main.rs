mod actions;
mod app;
mod collections;
mod config;
mod executor;
mod state;
mod types;
mod ui;
mod utils;

use app::App;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let app_result = App::default().run(terminal).await;
    ratatui::restore();
    app_result
}
