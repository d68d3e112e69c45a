pub mod factory;
pub mod plugin_adapter;

pub use factory::ProviderFactory;
pub use plugin_adapter::PluginAdapter;
