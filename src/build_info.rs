//! Build metadata embedded by `build.rs`, and the startup banner.

use serde::Serialize;

use crate::config::Config;

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BUILD_NUMBER: Option<&str> = option_env!("SPORK_BUILD_NUMBER");
const BUILD_TIMESTAMP: Option<&str> = option_env!("SPORK_BUILD_TIMESTAMP");

/// Identity of the running binary
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    /// RFC 3339, or "unknown" when built without `build.rs` output
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_parts(BUILD_NUMBER, BUILD_TIMESTAMP)
    }

    fn from_parts(number: Option<&str>, timestamp: Option<&'static str>) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            build_number: number.and_then(|n| n.trim().parse().ok()).unwrap_or(0),
            build_timestamp: timestamp.unwrap_or("unknown"),
        }
    }
}

/// Banner text shown on stderr before the MCP transport starts
pub fn startup_banner(info: &BuildInfo, config: &Config) -> String {
    let rule = "=".repeat(47);
    format!(
        "{rule}\n  Spork Nutrition Service\n  Version: {} | Build: {}\n  Compiled: {}\n  Weight parsing: {}\n{rule}",
        info.version,
        info.build_number,
        info.build_timestamp,
        config.weight_parsing.as_str(),
    )
}

pub fn print_startup_banner(config: &Config) {
    eprintln!("{}", startup_banner(&BuildInfo::current(), config));
}
