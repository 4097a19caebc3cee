mod service;

pub use service::{SettingsService, CONFIG_FILE_NAME};
