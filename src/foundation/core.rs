use serde::{Deserialize, Serialize};

use crate::foundation::error::{BridgeError, BridgeResult};
use crate::foundation::script::{ScriptLiteral, finite_or_zero, format_number, write_quoted};

/// A geographic position, longitude first.
///
/// Sent to the engine as `[lng,lat]`; read back from either that array form or the engine's
/// `{"lng":..,"lat":..}` object form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LngLat {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl LngLat {
    /// Create a position.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl ScriptLiteral for LngLat {
    fn write_script(&self, out: &mut String) {
        out.push('[');
        out.push_str(&format_number(self.lng));
        out.push(',');
        out.push_str(&format_number(self.lat));
        out.push(']');
    }
}

impl Serialize for LngLat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [finite_or_zero(self.lng), finite_or_zero(self.lat)].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LngLat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Obj {
                lng: f64,
                lat: f64,
            },
            Pair([f64; 2]),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Obj { lng, lat } => Self::new(lng, lat),
            Repr::Pair([lng, lat]) => Self::new(lng, lat),
        })
    }
}

/// A south-west / north-east bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LngLatBounds {
    /// South-west corner.
    pub sw: LngLat,
    /// North-east corner.
    pub ne: LngLat,
}

impl LngLatBounds {
    /// Create bounds from two corners.
    pub fn new(sw: LngLat, ne: LngLat) -> Self {
        Self { sw, ne }
    }

    /// Validate corner ordering and coordinate ranges.
    pub fn validate(&self) -> BridgeResult<()> {
        for (name, p) in [("sw", self.sw), ("ne", self.ne)] {
            if !p.lng.is_finite() || !p.lat.is_finite() {
                return Err(BridgeError::validation(format!(
                    "bounds {name} corner must be finite"
                )));
            }
            if !(-90.0..=90.0).contains(&p.lat) {
                return Err(BridgeError::validation(format!(
                    "bounds {name} latitude must be within [-90, 90]"
                )));
            }
        }
        if self.sw.lat > self.ne.lat {
            return Err(BridgeError::validation(
                "bounds sw latitude must be <= ne latitude",
            ));
        }
        Ok(())
    }

    /// Center point (no antimeridian handling).
    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.sw.lng + self.ne.lng) / 2.0,
            (self.sw.lat + self.ne.lat) / 2.0,
        )
    }
}

impl ScriptLiteral for LngLatBounds {
    fn write_script(&self, out: &mut String) {
        out.push('[');
        self.sw.write_script(out);
        out.push(',');
        self.ne.write_script(out);
        out.push(']');
    }
}

impl Serialize for LngLatBounds {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.sw, self.ne].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LngLatBounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            // `JSON.stringify(map.getBounds())` exposes the private corner fields.
            Engine {
                #[serde(rename = "_sw")]
                sw: LngLat,
                #[serde(rename = "_ne")]
                ne: LngLat,
            },
            Named {
                sw: LngLat,
                ne: LngLat,
            },
            Pair([LngLat; 2]),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Engine { sw, ne } | Repr::Named { sw, ne } => Self::new(sw, ne),
            Repr::Pair([sw, ne]) => Self::new(sw, ne),
        })
    }
}

/// Screen-space padding in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    /// Top padding.
    #[serde(serialize_with = "crate::foundation::script::finite")]
    pub top: f64,
    /// Bottom padding.
    #[serde(serialize_with = "crate::foundation::script::finite")]
    pub bottom: f64,
    /// Left padding.
    #[serde(serialize_with = "crate::foundation::script::finite")]
    pub left: f64,
    /// Right padding.
    #[serde(serialize_with = "crate::foundation::script::finite")]
    pub right: f64,
}

impl Padding {
    /// Same padding on every edge.
    pub fn uniform(px: f64) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

/// A color stored as a packed ARGB word.
///
/// The engine only understands CSS-style strings, so colors always travel as lowercase hex:
/// `#rrggbb`, or `#rrggbbaa` when `include_alpha` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Packed `0xAARRGGBB`.
    pub argb: u32,
    /// Whether the alpha byte is written out.
    pub include_alpha: bool,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color; renders without alpha.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            argb: 0xff00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32,
            include_alpha: false,
        }
    }

    /// Color with explicit alpha; renders as `#rrggbbaa`.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            argb: (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32,
            include_alpha: true,
        }
    }

    /// Wrap a packed ARGB word; alpha is rendered only when it is not fully opaque.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            argb,
            include_alpha: argb >> 24 != 0xff,
        }
    }

    /// Override whether alpha is written out.
    pub const fn with_alpha_output(mut self, include_alpha: bool) -> Self {
        self.include_alpha = include_alpha;
        self
    }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.argb >> 24) as u8
    }

    /// Lowercase hex representation.
    pub fn hex(self) -> String {
        let rgb = self.argb & 0x00ff_ffff;
        if self.include_alpha {
            format!("#{rgb:06x}{:02x}", self.alpha())
        } else {
            format!("#{rgb:06x}")
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (case-insensitive, `#` optional).
    pub fn parse_hex(s: &str) -> BridgeResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> BridgeResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| BridgeError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(BridgeError::validation("hex color must be ASCII"));
        }
        match s.len() {
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self::rgba(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            )),
            _ => Err(BridgeError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }
}

impl ScriptLiteral for Color {
    fn write_script(&self, out: &mut String) {
        write_quoted(out, &self.hex());
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            // Engine-side RGBA arrays use 0..=255 for every channel, alpha included.
            Arr(Vec<f64>),
        }

        fn channel(v: f64) -> u8 {
            v.clamp(0.0, 255.0).round() as u8
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(channel(*r), channel(*g), channel(*b))),
                // Opaque arrays read back the same as `[r, g, b]`.
                [r, g, b, a] => Ok(Self::from_argb(
                    Self::rgba(channel(*r), channel(*g), channel(*b), channel(*a)).argb,
                )),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
