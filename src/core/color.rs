use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("no '#' in colour value {0:?}")]
    MissingHash(String),
    #[error("expected six hex digits after '#' in {0:?}")]
    TooShort(String),
    #[error("invalid hex digits {0:?}")]
    InvalidDigits(String),
}

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse the first `#rrggbb` found in `value`. Computed style values often
    /// carry leading whitespace, and trailing characters are ignored.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let start = value
            .find('#')
            .ok_or_else(|| ColorError::MissingHash(value.to_string()))?;
        let digits = value[start + 1..]
            .get(..6)
            .ok_or_else(|| ColorError::TooShort(value.to_string()))?;
        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorError::InvalidDigits(digits.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS `rgba()` string with the given alpha.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({},{},{}, {})", self.r, self.g, self.b, alpha)
    }
}
