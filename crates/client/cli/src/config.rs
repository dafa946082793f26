//! CLI configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use wumpus_core::{GameConfig, NavigatorConfig};
use wumpus_runtime::RuntimeConfig;

/// Settings for one CLI run.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub runtime: RuntimeConfig,
    /// Write logs to a file in addition to stderr.
    pub log_to_file: bool,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
    /// Print the session report as JSON instead of plain text.
    pub report_json: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WUMPUS_GRID_SIZE` - Side length of the grid (default: 4)
    /// - `WUMPUS_SEED` - World seed (default: derived from the clock)
    /// - `WUMPUS_MAX_TURNS` - Action budget per session (default: 256)
    /// - `WUMPUS_ROUTE_PLANNING` - Enable multi-step routing (default: false)
    /// - `WUMPUS_LOG_TO_FILE` - Also log to a file (default: false)
    /// - `WUMPUS_LOG_DIR` - Log directory; implies `WUMPUS_LOG_TO_FILE`
    /// - `WUMPUS_REPORT_JSON` - Print the report as JSON (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let seed = read_env::<u64>("WUMPUS_SEED").unwrap_or_else(clock_seed);
        let mut game = GameConfig::with_seed(seed);
        if let Some(size) = read_env::<u32>("WUMPUS_GRID_SIZE") {
            game.grid_size = size;
        }
        config.runtime.game = game;

        if let Some(max_turns) = read_env::<u64>("WUMPUS_MAX_TURNS") {
            config.runtime.max_turns = max_turns.max(1);
        }
        if let Some(enable) = read_flag("WUMPUS_ROUTE_PLANNING") {
            config.runtime.navigator = NavigatorConfig::with_route_planning(enable);
        }

        config.log_dir = env::var("WUMPUS_LOG_DIR").ok().map(PathBuf::from);
        config.log_to_file =
            config.log_dir.is_some() || read_flag("WUMPUS_LOG_TO_FILE").unwrap_or(false);
        config.report_json = read_flag("WUMPUS_REPORT_JSON").unwrap_or(false);

        config
    }

    /// Directory for log files: the override, else the platform cache dir.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "wumpus")
                .map(|dirs| dirs.cache_dir().join("logs"))
                .unwrap_or_else(|| PathBuf::from("/tmp/wumpus/logs"))
        })
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Accepts `true`/`false`, `1`/`0`, or a bare variable as "true".
fn read_flag(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim() {
        "" | "1" => Some(true),
        "0" => Some(false),
        other => other.parse().ok(),
    }
}
