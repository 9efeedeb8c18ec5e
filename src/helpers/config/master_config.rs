use super::*;

/// Configuration for the whole flotilla-server program
#[derive(Debug)]
pub struct MasterConfig {
    /// If to abort with success (for example, after showing --help)
    pub happy_exit: bool,
    /// None means run until the process is killed
    pub max_game_time: Option<f64>,
    pub tick_seconds: f64,
    pub extension_strategy: ExtensionStrategy,
    pub entity_types_path: String,
    pub bot_count: usize,
}

impl Default for MasterConfig {
    /// NOTE: the true default configuration you get when you run flotilla is determined by config_entries(), this is
    /// just an empty struct
    fn default() -> Self {
        Self {
            happy_exit: false,
            max_game_time: None,
            tick_seconds: 1.0 / Ticks::FREQUENCY_HZ as f64,
            extension_strategy: ExtensionStrategy::default(),
            entity_types_path: String::new(),
            bot_count: 0,
        }
    }
}
