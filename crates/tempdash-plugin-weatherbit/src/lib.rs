//! Weatherbit plugin for Tempdash
//!
//! Queries the Weatherbit "current observations" endpoint with scientific
//! units (`units=S`), which reports temperatures in Kelvin.

mod client;
mod config;
mod mapper;
mod metadata;
mod plugin;
mod types;

pub use plugin::WeatherbitPlugin;

tempdash_plugin_api::register_plugin!(WeatherbitPlugin);
