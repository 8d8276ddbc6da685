//! Run configuration and build-time pattern selection.
//!
//! Exactly one pattern runs for the lifetime of the device. The choice is
//! an explicit enum, fixed at compile time through the `LED_PATTERN`
//! environment variable.

use core::fmt;

use log::warn;

/// Which of the three LED patterns the firmware runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Asymmetric ping-pong sweep across the three channels.
    Chase,
    /// Three-bit counter, one bit per channel.
    BinaryCounter,
    /// Independent coin flip per channel each step.
    RandomBlink,
}

impl Pattern {
    /// Parse a pattern name as given in `LED_PATTERN`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chase" => Some(Self::Chase),
            "binary" | "binary-counter" | "counter" => Some(Self::BinaryCounter),
            "random" | "random-blink" => Some(Self::RandomBlink),
            _ => None,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chase => write!(f, "chase"),
            Self::BinaryCounter => write!(f, "binary-counter"),
            Self::RandomBlink => write!(f, "random-blink"),
        }
    }
}

/// Pattern-task parameters, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Selected pattern.
    pub pattern: Pattern,
    /// Fade duration and inter-step delay (milliseconds).
    pub step_ms: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pattern: Pattern::RandomBlink,
            step_ms: 500,
        }
    }
}

impl RunConfig {
    /// Configuration as baked into this build.
    ///
    /// `LED_PATTERN` is captured at compile time; an unknown name falls back
    /// to the default with a warning at startup.
    pub fn compiled() -> Self {
        let mut cfg = Self::default();
        if let Some(name) = option_env!("LED_PATTERN") {
            match Pattern::parse(name) {
                Some(p) => cfg.pattern = p,
                None => warn!("unknown LED_PATTERN '{}', keeping {}", name, cfg.pattern),
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_names() {
        assert_eq!(Pattern::parse("chase"), Some(Pattern::Chase));
        assert_eq!(Pattern::parse("binary-counter"), Some(Pattern::BinaryCounter));
        assert_eq!(Pattern::parse("random-blink"), Some(Pattern::RandomBlink));
    }

    #[test]
    fn parse_is_case_and_whitespace_tolerant() {
        assert_eq!(Pattern::parse(" Chase "), Some(Pattern::Chase));
        assert_eq!(Pattern::parse("RANDOM"), Some(Pattern::RandomBlink));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Pattern::parse("disco"), None);
        assert_eq!(Pattern::parse(""), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for p in [Pattern::Chase, Pattern::BinaryCounter, Pattern::RandomBlink] {
            assert_eq!(Pattern::parse(&p.to_string()), Some(p));
        }
    }

    #[test]
    fn default_config_is_sane() {
        let c = RunConfig::default();
        assert!(c.step_ms > 0);
    }
}
