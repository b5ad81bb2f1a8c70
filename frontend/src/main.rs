use crate::app::App;
use crate::config::AppConfig;

mod api;
mod app;
mod components;
mod config;
mod logger;
mod session;

fn main() {
    let config = AppConfig::from_build_env();
    logger::init(config.log_level);
    log::info!("PinyImage starting, api base {:?}", config.api.base_url);

    yew::Renderer::<App>::with_props(config.into()).render();
}
