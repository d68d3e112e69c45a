pub mod error;
pub mod plugin;
pub mod registry;
pub mod schema;
pub mod units;
pub mod utils;

pub use error::{
    PluginError,
    PluginResult,
};
pub use plugin::{
    Plugin,
    PluginMetadata,
};
pub use registry::PluginRegistry;
pub use schema::{
    ConfigField,
    ConfigFieldType,
    ConfigSchema,
};
pub use units::{
    plausible_kelvin,
    TemperatureUnit,
};

#[macro_export]
macro_rules! register_plugin {
    ($plugin_type:ty) => {
        pub fn register(registry: &mut $crate::PluginRegistry) {
            registry.register(Box::new(<$plugin_type>::default()));
        }
    };
}
