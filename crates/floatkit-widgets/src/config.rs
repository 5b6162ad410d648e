#![forbid(unsafe_code)]

//! Tooltip defaults, overridable from the environment.

use std::env;
use std::fmt;

use floatkit_core::Side;
use floatkit_layout::{DEFAULT_OFFSET, PlacementConfig};

const ENV_TOOLTIP_OFFSET: &str = "FLOATKIT_TOOLTIP_OFFSET";
const ENV_TOOLTIP_DELAY_MS: &str = "FLOATKIT_TOOLTIP_DELAY_MS";
const ENV_TOOLTIP_DURATION_MS: &str = "FLOATKIT_TOOLTIP_DURATION_MS";
const ENV_TOOLTIP_TIMING_FN: &str = "FLOATKIT_TOOLTIP_TIMING_FN";
const ENV_TOOLTIP_POSITION: &str = "FLOATKIT_TOOLTIP_POSITION";
const ENV_TOOLTIP_FALLBACK_POSITION: &str = "FLOATKIT_TOOLTIP_FALLBACK_POSITION";

/// Tooltip configuration (deterministic, env-overridable).
///
/// # Environment Variables
/// - `FLOATKIT_TOOLTIP_OFFSET` (f64, pixels)
/// - `FLOATKIT_TOOLTIP_DELAY_MS` (u64)
/// - `FLOATKIT_TOOLTIP_DURATION_MS` (u64)
/// - `FLOATKIT_TOOLTIP_TIMING_FN` (CSS timing function, e.g. `ease-in-out`)
/// - `FLOATKIT_TOOLTIP_POSITION` = top|right|bottom|left
/// - `FLOATKIT_TOOLTIP_FALLBACK_POSITION` = top|right|bottom|left|none
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    /// Gap between anchor and tooltip (default: 8).
    pub offset: f64,
    /// Delay before the fade-in starts, in milliseconds (default: 0).
    pub delay_ms: u64,
    /// Fade duration in milliseconds (default: 200).
    pub duration_ms: u64,
    /// Timing function passed through to the renderer (default: `ease`).
    pub timing_fn: String,
    /// Preferred side (default: top).
    pub position: Side,
    /// Side tried first when the preferred one collides (default: none).
    pub fallback_position: Option<Side>,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            delay_ms: 0,
            duration_ms: 200,
            timing_fn: "ease".to_string(),
            position: Side::Top,
            fallback_position: None,
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct TooltipConfigParse {
    pub config: TooltipConfig,
    pub errors: Vec<TooltipConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl TooltipConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for TooltipConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for TooltipConfigError {}

impl TooltipConfig {
    /// Set the anchor/tooltip gap.
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set delay before showing in milliseconds.
    #[must_use]
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Set fade duration in milliseconds.
    #[must_use]
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Set the timing function.
    #[must_use]
    pub fn timing_fn(mut self, timing_fn: impl Into<String>) -> Self {
        self.timing_fn = timing_fn.into();
        self
    }

    /// Set the preferred side.
    #[must_use]
    pub fn position(mut self, side: Side) -> Self {
        self.position = side;
        self
    }

    /// Set the explicit fallback side.
    #[must_use]
    pub fn fallback_position(mut self, side: Option<Side>) -> Self {
        self.fallback_position = side;
        self
    }

    /// Placement solver settings derived from this config.
    #[must_use]
    pub fn placement(&self) -> PlacementConfig {
        PlacementConfig::default().offset(self.offset)
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> TooltipConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> TooltipConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<TooltipConfigError>> {
        let mut errors = Vec::new();
        if !self.offset.is_finite() || self.offset < 0.0 {
            errors.push(TooltipConfigError::new(
                "offset",
                self.offset.to_string(),
                "expected finite, non-negative pixels",
            ));
        }
        if self.timing_fn.trim().is_empty() {
            errors.push(TooltipConfigError::new(
                "timing_fn",
                self.timing_fn.clone(),
                "expected non-empty timing function",
            ));
        }
        if self.fallback_position == Some(self.position) {
            errors.push(TooltipConfigError::new(
                "fallback_position",
                self.position.as_str(),
                "fallback equals position; a collision would suppress immediately",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Short human-readable summary for debug overlays.
    #[must_use]
    pub fn summary_short(&self) -> String {
        let fallback = self.fallback_position.map_or("none", Side::as_str);
        format!(
            "Tooltip: {} → {fallback} · {}px · {}ms {} +{}ms",
            self.position, self.offset, self.duration_ms, self.timing_fn, self.delay_ms
        )
    }
}

fn from_env_with<F>(mut get: F) -> TooltipConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = TooltipConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_TOOLTIP_OFFSET) {
        match parse_f64(&value) {
            Some(parsed) => config.offset = parsed,
            None => errors.push(TooltipConfigError::new(
                "offset",
                value,
                "expected number of pixels",
            )),
        }
    }

    if let Some(value) = get(ENV_TOOLTIP_DELAY_MS) {
        match parse_u64(&value) {
            Some(parsed) => config.delay_ms = parsed,
            None => errors.push(TooltipConfigError::new(
                "delay_ms",
                value,
                "expected non-negative integer",
            )),
        }
    }

    if let Some(value) = get(ENV_TOOLTIP_DURATION_MS) {
        match parse_u64(&value) {
            Some(parsed) => config.duration_ms = parsed,
            None => errors.push(TooltipConfigError::new(
                "duration_ms",
                value,
                "expected non-negative integer",
            )),
        }
    }

    if let Some(value) = get(ENV_TOOLTIP_TIMING_FN) {
        config.timing_fn = value.trim().to_string();
    }

    if let Some(value) = get(ENV_TOOLTIP_POSITION) {
        match value.trim().parse::<Side>() {
            Ok(parsed) => config.position = parsed,
            Err(err) => errors.push(TooltipConfigError::new(
                "position",
                value,
                err.to_string(),
            )),
        }
    }

    if let Some(value) = get(ENV_TOOLTIP_FALLBACK_POSITION) {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            config.fallback_position = None;
        } else {
            match trimmed.parse::<Side>() {
                Ok(parsed) => config.fallback_position = Some(parsed),
                Err(err) => errors.push(TooltipConfigError::new(
                    "fallback_position",
                    value,
                    err.to_string(),
                )),
            }
        }
    }

    if let Err(mut violations) = config.validate() {
        errors.append(&mut violations);
    }

    TooltipConfigParse { config, errors }
}

#[inline]
fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

#[inline]
fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
