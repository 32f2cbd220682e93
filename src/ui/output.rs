//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Echo every jj command before running it.
    #[default]
    Normal,
    /// Show messages and errors only.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--quiet` flag and the `echo_commands` setting.
    pub fn resolve(quiet: bool, echo_commands: bool) -> Self {
        if quiet || !echo_commands {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Check if this mode echoes jj commands.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_commands() {
        assert!(OutputMode::Normal.shows_commands());
        assert!(!OutputMode::Quiet.shows_commands());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn quiet_flag_or_disabled_echo_means_quiet() {
        assert_eq!(OutputMode::resolve(false, true), OutputMode::Normal);
        assert_eq!(OutputMode::resolve(true, true), OutputMode::Quiet);
        assert_eq!(OutputMode::resolve(false, false), OutputMode::Quiet);
    }
}
