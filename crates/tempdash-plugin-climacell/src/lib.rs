//! ClimaCell plugin for Tempdash
//!
//! ClimaCell's realtime endpoint is keyed by coordinates, so a measurement
//! takes two requests:
//! - `geocoder` - resolves the city through the OpenCage geocoding API
//! - `client` - fetches the realtime temperature at those coordinates
//!
//! ClimaCell reports Celsius by default; `mapper` converts to Kelvin.

mod client;
mod config;
mod geocoder;
mod mapper;
mod metadata;
mod plugin;
mod types;

pub use plugin::ClimaCellPlugin;

tempdash_plugin_api::register_plugin!(ClimaCellPlugin);
