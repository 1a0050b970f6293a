//! Browser front end of the COVID-19 country sidebar.

pub mod api;
pub mod app;
pub mod chart;
pub mod config;
pub mod dom;
pub mod platform;

pub fn run() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    yew::Renderer::<app::App>::new().render();
}
