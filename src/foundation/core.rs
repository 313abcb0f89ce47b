use std::{fmt, str::FromStr};

use crate::foundation::error::{CounterError, CounterResult};

/// Longest digit string accepted from interactive input.
pub const MAX_DIGITS: usize = 1000;

/// Number of leading digits kept by [`default_file_stem`].
const FILE_STEM_DIGITS: usize = 10;

/// Non-empty string made only of ASCII digits `0`-`9`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Validate `s` as a digit string of any length.
    pub fn new(s: impl Into<String>) -> CounterResult<Self> {
        let s = s.into();
        if s.is_empty() {
            return Err(CounterError::invalid_parameter("digit string is empty"));
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(CounterError::invalid_parameter(format!(
                "digit string contains non-digit character {c:?}"
            )));
        }
        Ok(Self(s))
    }

    /// Validate `s` and additionally cap its length at `max_len` characters.
    pub fn parse_bounded(s: &str, max_len: usize) -> CounterResult<Self> {
        let digits = Self::new(s.trim())?;
        if digits.len() > max_len {
            return Err(CounterError::invalid_parameter(format!(
                "digit string has {} characters (max {max_len})",
                digits.len()
            )));
        }
        Ok(digits)
    }

    /// Borrow as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when there are no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the digit characters left to right.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DigitString {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Playback speed factor for animated counters.
///
/// Source frame durations are divided by this value: `2.0` plays twice as fast,
/// `0.5` half as fast.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SpeedMultiplier(f64);

impl SpeedMultiplier {
    /// Multiplier used when the caller does not pick one.
    pub const DEFAULT: Self = Self(0.5);

    /// Accept any finite value strictly greater than zero.
    pub fn new(value: f64) -> CounterResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CounterError::invalid_parameter(format!(
                "speed multiplier must be a finite value > 0 (got {value})"
            )));
        }
        Ok(Self(value))
    }

    /// Raw multiplier value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Re-time a source frame duration, truncating to whole milliseconds.
    pub fn adjust_ms(self, original_ms: u32) -> u32 {
        let adjusted = (f64::from(original_ms) / self.0).trunc();
        if adjusted >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            adjusted as u32
        }
    }
}

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for SpeedMultiplier {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| {
            CounterError::invalid_parameter(format!("speed multiplier {s:?} is not a number"))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render options shared by every compositor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOpts {
    /// Playback speed for animated themes; ignored by static themes.
    pub speed: SpeedMultiplier,
}

/// Default output stem for caller-facing tools: `<first 10 digits>_<theme>`.
pub fn default_file_stem(digits: &DigitString, theme: &str) -> String {
    let prefix: String = digits.chars().take(FILE_STEM_DIGITS).collect();
    format!("{prefix}_{theme}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
