use crate::application::collector::skip_interactive;
use crate::domain::entities::{Method, Protocol, RequestParameters};
use tracing::{Level, warn};

/// Settings for a single run, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub explicit: RequestParameters,
    pub skip_interactive: bool,
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(explicit: RequestParameters, no_ui: bool, verbose: bool) -> Self {
        let skip_interactive = skip_interactive(&explicit, no_ui);
        Self {
            explicit,
            skip_interactive,
            verbose,
        }
    }

    /// Banners and prompts are shown only outside skip-interactive mode.
    pub fn interactive(&self) -> bool {
        !self.skip_interactive
    }

    pub fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::WARN }
    }
}

/// Explicit values bypass the menus, so nothing stops e.g. `ftp` or `TRACE`.
/// They are passed through unchanged.
pub fn warn_on_unlisted_values(explicit: &RequestParameters) {
    if !explicit.protocol.is_empty() && explicit.protocol.parse::<Protocol>().is_err() {
        warn!(protocol = %explicit.protocol, "protocol is not one of http, https");
    }
    if !explicit.method.is_empty() && explicit.method.parse::<Method>().is_err() {
        warn!(method = %explicit.method, "request type is not one of the listed methods");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial() -> RequestParameters {
        RequestParameters {
            protocol: "http".to_string(),
            url: "example.com".to_string(),
            method: "GET".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn no_ui_forces_skip_interactive() {
        let config = RunConfig::new(partial(), true, false);
        assert!(config.skip_interactive);
        assert!(!config.interactive());
    }

    #[test]
    fn partial_input_stays_interactive() {
        let config = RunConfig::new(partial(), false, false);
        assert!(config.interactive());
    }

    #[test]
    fn complete_input_implies_skip_interactive() {
        let explicit = RequestParameters {
            auth: "a:b".to_string(),
            headers: "X:1".to_string(),
            body: "data".to_string(),
            ..partial()
        };
        assert!(RunConfig::new(explicit, false, false).skip_interactive);
    }

    #[test]
    fn verbose_raises_log_level() {
        assert_eq!(RunConfig::new(partial(), false, true).log_level(), Level::DEBUG);
        assert_eq!(RunConfig::new(partial(), false, false).log_level(), Level::WARN);
    }
}
