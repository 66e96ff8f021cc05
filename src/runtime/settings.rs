use crate::config::Settings;

/// Load settings, falling back to the built-in defaults when the config
/// file is broken. A bad config should not keep the player from starting.
pub fn load_settings() -> Settings {
    match Settings::load() {
        Ok(settings) => match settings.validate() {
            Ok(()) => settings,
            Err(msg) => {
                eprintln!("harmony: invalid config, using defaults: {msg}");
                Settings::default()
            }
        },
        Err(e) => {
            eprintln!("harmony: failed to load config, using defaults: {e}");
            Settings::default()
        }
    }
}
