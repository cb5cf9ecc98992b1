mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_SOURCE, Defaults, MyMemoryConfig, ResolveOptions,
    ResolvedConfig, resolve_config,
};
