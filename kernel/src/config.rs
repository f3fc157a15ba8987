// SPDX-License-Identifier: MPL-2.0

use log::LevelFilter;

/// Settings fixed when the firmware image is built.
///
/// The controller reads no input at run time; everything here comes from
/// the build environment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BootConfig {
    /// The maximum level that reaches the console. Set with `EC_LOG_LEVEL`.
    pub log_level: LevelFilter,
}

impl BootConfig {
    const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

    /// Returns the configuration the image was built with.
    pub fn from_build_env() -> Self {
        Self::parse(option_env!("EC_LOG_LEVEL"))
    }

    // An unknown level falls back to the default: there is no console to
    // complain on before the logger exists.
    fn parse(log_level: Option<&str>) -> Self {
        Self {
            log_level: log_level
                .and_then(ecstd::logger::parse_log_level)
                .unwrap_or(Self::DEFAULT_LOG_LEVEL),
        }
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::parse(None)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_level() {
        assert_eq!(BootConfig::default().log_level, LevelFilter::Info);
    }

    #[test]
    fn explicit_level() {
        assert_eq!(BootConfig::parse(Some("trace")).log_level, LevelFilter::Trace);
        assert_eq!(BootConfig::parse(Some("off")).log_level, LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back() {
        assert_eq!(BootConfig::parse(Some("loud")).log_level, LevelFilter::Info);
    }
}
