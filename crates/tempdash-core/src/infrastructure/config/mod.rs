pub mod interpolation;
pub mod loader;
pub mod schema;
pub mod token_ref;
pub mod validation;

pub use interpolation::{
    interpolate,
    interpolate_toml,
    InterpolationError,
};
pub use loader::{
    ConfigLoadError,
    ConfigLoadResult,
    ConfigLoader,
};
pub use schema::{
    GeneralConfig,
    ProviderFileConfig,
    ServerConfig,
    TempdashConfig,
};
pub use token_ref::{
    TokenRefError,
    TokenReference,
};
pub use validation::{
    ConfigIssue,
    ConfigValidator,
    IssueCode,
    ValidationResult,
};
