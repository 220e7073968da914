//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::MaitrizPaths;
pub use settings::Settings;
