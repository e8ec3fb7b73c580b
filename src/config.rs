/// Runtime settings resolved from command-line flags and environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Emoji glyphs in output; ASCII fallbacks when false
    pub use_emoji: bool,
    /// 0 = warnings only, 1 = info, 2+ = debug
    pub verbosity: u8,
}

impl Settings {
    pub fn new(ascii: bool, verbosity: u8) -> Self {
        Self {
            use_emoji: !ascii,
            verbosity,
        }
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "salva=warn",
            1 => "salva=info",
            _ => "salva=debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_new() {
        let settings = Settings::new(true, 0);
        assert!(!settings.use_emoji);
        assert_eq!(settings.log_filter(), "salva=warn");
    }

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(Settings::new(false, 1).log_filter(), "salva=info");
        assert_eq!(Settings::new(false, 2).log_filter(), "salva=debug");
        assert_eq!(Settings::new(false, 9).log_filter(), "salva=debug");
    }
}
