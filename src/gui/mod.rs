//! egui front end for the countdown widget

mod app;
mod components;
mod constants;

pub use app::run_gui;
