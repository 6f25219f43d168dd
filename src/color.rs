use std::str::FromStr;

use thiserror::Error;

/// Flat color painted behind the icon, inside the icon shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl BackgroundColor {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha == 0
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 3 or 4 color components, got {0}")]
    ComponentCount(usize),

    #[error("invalid color component `{0}`, expected an integer from 0 to 255")]
    Component(String),

    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
}

/// Parses either a number group such as `(255, 0, 0)` / `0,0,0,128`, or any
/// CSS color (`white`, `#ff000080`, `rgb(0 0 0 / 50%)`).
impl FromStr for BackgroundColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        if is_number_group(inner) {
            parse_number_group(inner)
        } else {
            parse_css(trimmed)
        }
    }
}

fn is_number_group(s: &str) -> bool {
    let starts_numeric = s
        .trim_start()
        .starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+');
    starts_numeric && s.contains(',')
}

fn parse_number_group(s: &str) -> Result<BackgroundColor, ColorError> {
    let components = s
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u8>()
                .map_err(|_| ColorError::Component(part.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match components[..] {
        [red, green, blue] => Ok(BackgroundColor::rgb(red, green, blue)),
        [red, green, blue, alpha] => Ok(BackgroundColor::rgba(red, green, blue, alpha)),
        _ => Err(ColorError::ComponentCount(components.len())),
    }
}

fn parse_css(s: &str) -> Result<BackgroundColor, ColorError> {
    let color =
        css_color::Srgb::from_str(s).map_err(|_| ColorError::Unrecognized(s.to_string()))?;

    Ok(BackgroundColor::rgba(
        to_channel(color.red),
        to_channel(color.green),
        to_channel(color.blue),
        to_channel(color.alpha),
    ))
}

fn to_channel(value: f32) -> u8 {
    (value * 255.).round().clamp(0., 255.) as u8
}
