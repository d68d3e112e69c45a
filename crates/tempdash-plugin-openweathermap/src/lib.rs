//! OpenWeatherMap plugin for Tempdash
//!
//! Reports the current temperature of a city from the OpenWeatherMap
//! "current weather" endpoint. The API answers in Kelvin by default, so no
//! conversion is needed.
//!
//! # Example Usage
//!
//! ```no_run
//! use tempdash_plugin_openweathermap::OpenWeatherMapPlugin;
//! use tempdash_plugin_api::PluginRegistry;
//!
//! let mut registry = PluginRegistry::new();
//! registry.register(Box::new(OpenWeatherMapPlugin::new()));
//! ```

mod client;
mod config;
mod mapper;
mod metadata;
mod plugin;
mod types;

pub use plugin::OpenWeatherMapPlugin;

tempdash_plugin_api::register_plugin!(OpenWeatherMapPlugin);
