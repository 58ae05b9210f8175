//! `#RRGGBB` colour decoding.
//!
//! The dashboard's colour picker submits CSS hex colours.  [`HexColor`]
//! is the validated, stored form; [`Rgb`] is the decoded channel triple.

use core::fmt;

/// Length of `#RRGGBB`.
pub const HEX_COLOR_LEN: usize = 7;

/// Why a colour token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// Fewer than 7 characters.
    TooShort,
    /// More than 7 characters.
    TooLong,
    /// First character is not `#`.
    MissingHash,
    /// A channel digit is not `0-9a-fA-F`.
    InvalidDigit,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "colour shorter than #RRGGBB"),
            Self::TooLong => write!(f, "colour longer than #RRGGBB"),
            Self::MissingHash => write!(f, "colour must start with '#'"),
            Self::InvalidDigit => write!(f, "colour contains a non-hex digit"),
        }
    }
}

/// Decoded 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pack as `(R << 16) | (G << 8) | B`.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

fn hex_nibble(c: u8) -> Result<u8, ColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorError::InvalidDigit),
    }
}

fn hex_byte(hi: u8, lo: u8) -> Result<u8, ColorError> {
    Ok((hex_nibble(hi)? << 4) | hex_nibble(lo)?)
}

/// Decode `#RRGGBB` into its channels.
pub fn hex_to_rgb(s: &str) -> Result<Rgb, ColorError> {
    let bytes = s.as_bytes();
    if bytes.len() < HEX_COLOR_LEN {
        return Err(ColorError::TooShort);
    }
    if bytes.len() > HEX_COLOR_LEN {
        return Err(ColorError::TooLong);
    }
    if bytes[0] != b'#' {
        return Err(ColorError::MissingHash);
    }
    Ok(Rgb {
        r: hex_byte(bytes[1], bytes[2])?,
        g: hex_byte(bytes[3], bytes[4])?,
        b: hex_byte(bytes[5], bytes[6])?,
    })
}

/// Decode `#RRGGBB` straight to the packed 24-bit value.
pub fn hex_to_packed(s: &str) -> Result<u32, ColorError> {
    hex_to_rgb(s).map(Rgb::packed)
}

const WHITE: &str = "#FFFFFF";
const _: () = assert!(WHITE.len() == HEX_COLOR_LEN);

/// A validated `#RRGGBB` string, kept verbatim (digit case preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor {
    text: heapless::String<HEX_COLOR_LEN>,
    rgb: Rgb,
}

impl HexColor {
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let rgb = hex_to_rgb(s)?;
        let mut text = heapless::String::new();
        // Length was checked by hex_to_rgb and all bytes are ASCII.
        text.push_str(s).map_err(|()| ColorError::TooLong)?;
        Ok(Self { text, rgb })
    }

    /// Power-on colour of the grow light.
    pub fn white() -> Self {
        Self {
            text: WHITE.chars().collect(),
            rgb: Rgb {
                r: 0xFF,
                g: 0xFF,
                b: 0xFF,
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
