/// Gala event details loaded from config.toml
pub mod event;
