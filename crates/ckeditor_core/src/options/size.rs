//! Sizes with a CSS metric, e.g. the editor `height` and `width`.

use super::ToJs;
use crate::error::EditorError;
use crate::js;
use std::str::FromStr;

/// CSS unit attached to a [`SizeOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeMetric {
    Em,
    Pixel,
    Percentage,
}

impl SizeMetric {
    /// Suffix written after the amount.
    pub fn suffix(self) -> &'static str {
        match self {
            SizeMetric::Em => "em",
            SizeMetric::Pixel => "px",
            SizeMetric::Percentage => "%",
        }
    }
}

/// An amount plus its metric, rendered as a quoted CSS length (`'200px'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeOption {
    value: i32,
    metric: SizeMetric,
}

impl SizeOption {
    pub fn new(value: i32, metric: SizeMetric) -> Self {
        Self { value, metric }
    }

    pub fn pixels(value: i32) -> Self {
        Self::new(value, SizeMetric::Pixel)
    }

    pub fn percent(value: i32) -> Self {
        Self::new(value, SizeMetric::Percentage)
    }

    pub fn em(value: i32) -> Self {
        Self::new(value, SizeMetric::Em)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn metric(&self) -> SizeMetric {
        self.metric
    }

    /// The unquoted CSS text, e.g. `50%`.
    pub fn css(&self) -> String {
        format!("{}{}", self.value, self.metric.suffix())
    }
}

impl ToJs for SizeOption {
    fn to_js(&self) -> String {
        js::quotes(&self.css())
    }
}

impl FromStr for SizeOption {
    type Err = EditorError;

    /// Parse `200px`, `50%` or `3em`. A bare number is read as pixels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (amount, metric) = if let Some(rest) = trimmed.strip_suffix("px") {
            (rest, SizeMetric::Pixel)
        } else if let Some(rest) = trimmed.strip_suffix('%') {
            (rest, SizeMetric::Percentage)
        } else if let Some(rest) = trimmed.strip_suffix("em") {
            (rest, SizeMetric::Em)
        } else {
            (trimmed, SizeMetric::Pixel)
        };
        let value = amount
            .trim()
            .parse::<i32>()
            .map_err(|_| EditorError::InvalidValue(format!("not a size: '{}'", s)))?;
        Ok(Self::new(value, metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_quoted_css_length() {
        assert_eq!(SizeOption::new(200, SizeMetric::Pixel).to_js(), "'200px'");
        assert_eq!(SizeOption::new(50, SizeMetric::Percentage).to_js(), "'50%'");
        assert_eq!(SizeOption::em(3).to_js(), "'3em'");
    }

    #[test]
    fn parses_css_lengths() {
        assert_eq!("200px".parse::<SizeOption>().unwrap(), SizeOption::pixels(200));
        assert_eq!(" 50% ".parse::<SizeOption>().unwrap(), SizeOption::percent(50));
        assert_eq!("3em".parse::<SizeOption>().unwrap(), SizeOption::em(3));
        assert_eq!("120".parse::<SizeOption>().unwrap(), SizeOption::pixels(120));
    }

    #[test]
    fn rejects_garbage() {
        assert!("wide".parse::<SizeOption>().is_err());
        assert!("px".parse::<SizeOption>().is_err());
    }
}
