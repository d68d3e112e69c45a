pub mod config;
pub mod http_client;
pub mod providers;

pub use config::{
    ConfigLoadError,
    ConfigLoader,
    GeneralConfig,
    ProviderFileConfig,
    ServerConfig,
    TempdashConfig,
    TokenReference,
};
pub use http_client::HttpClientManager;
pub use providers::{
    PluginAdapter,
    ProviderFactory,
};
