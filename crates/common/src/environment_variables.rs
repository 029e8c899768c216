//! The list of environment variables used throughout the application.

// Configuration environment variables
pub const CONFIG_PATH: &str = "AUTOSCAN_CONFIG_PATH";
pub const PLEX_TOKEN: &str = "AUTOSCAN_PLEX_TOKEN";

// Web API environment variables
pub const WEB_ADDRESS: &str = "AUTOSCAN_WEB_ADDRESS";
pub const WEB_PORT: &str = "AUTOSCAN_WEB_PORT";

// Miscellaneous
pub const LOG_FILTER: &str = "AUTOSCAN_LOG_FILTER";
pub const LOG_DIR: &str = "AUTOSCAN_LOG_DIR";
