mod auth;
mod catalog;
mod components;
mod config;
mod error;
mod model;
mod state;
mod storage;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    yew::Renderer::<App>::new().render();
}
