// CLASSIFICATION: COMMUNITY
// Filename: geometry.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16
//
// ─────────────────────────────────────────────────────────────
// Cohesix · Display Geometry Parser
//
// Parses operator supplied resolution and console mode strings
// from the boot configuration.  The grammar is deliberately
// lenient: anything that does not match is treated as "no
// override requested" instead of an error.
//
//   Resolution   = "" | "Max" | <W> "x" <H> "@" <BPP>
//   ConsoleMode  = "" | "Max" | <W> "x" <H>
//
// # Public API
// * [`Geometry`] – parsed width/height/bpp plus the max sentinel
// * [`parse_screen_resolution`] – three component form
// * [`parse_console_mode`] – two component form
// ─────────────────────────────────────────────────────────────

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use core::fmt;

use serde::Serialize;

/// Literal requesting the platform's native or maximum geometry.
pub const MAX_SENTINEL: &str = "Max";

/// Parsed display or console geometry.
///
/// When `use_maximum` is set the numeric fields are advisory only; the
/// firmware setter picks the concrete mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Geometry {
    /// Horizontal pixels (or text columns for console modes).
    pub width: u32,
    /// Vertical pixels (or text rows for console modes).
    pub height: u32,
    /// Colour depth; always zero for console modes.
    pub bits_per_pixel: u32,
    /// Use the maximum geometry the platform supports.
    pub use_maximum: bool,
}

impl Geometry {
    /// Geometry representing the `Max` sentinel.
    pub const fn maximum() -> Self {
        Self {
            width: 0,
            height: 0,
            bits_per_pixel: 0,
            use_maximum: true,
        }
    }

    /// Returns `true` when the caller should invoke the firmware setter.
    pub fn requests_change(&self) -> bool {
        self.use_maximum || (self.width > 0 && self.height > 0)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if self.bits_per_pixel != 0 {
            write!(f, "@{}", self.bits_per_pixel)?;
        }
        if self.use_maximum {
            f.write_str(" (max)")?;
        }
        Ok(())
    }
}

/// Parse a decimal component made of ASCII digits only.
///
/// `u32::from_str` alone would accept a leading `+`.
fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_dimensions(text: &str) -> Option<(u32, u32)> {
    let (width, height) = text.split_once('x')?;
    Some((parse_component(width)?, parse_component(height)?))
}

/// Parse a screen resolution of the form `WxH@BPP` or the `Max` sentinel.
///
/// Malformed input yields [`Geometry::default`], which requests no change.
///
/// # Examples
///
/// ```
/// use cohesix_inout::geometry::parse_screen_resolution;
///
/// let g = parse_screen_resolution("1920x1080@32");
/// assert_eq!((g.width, g.height, g.bits_per_pixel), (1920, 1080, 32));
/// assert!(parse_screen_resolution("Max").use_maximum);
/// assert!(!parse_screen_resolution("1920x1080").requests_change());
/// ```
pub fn parse_screen_resolution(text: &str) -> Geometry {
    if text == MAX_SENTINEL {
        return Geometry::maximum();
    }

    let parsed = text.split_once('@').and_then(|(dims, bpp)| {
        let (width, height) = parse_dimensions(dims)?;
        Some(Geometry {
            width,
            height,
            bits_per_pixel: parse_component(bpp)?,
            use_maximum: false,
        })
    });

    parsed.unwrap_or_default()
}

/// Parse a text console mode of the form `WxH` or the `Max` sentinel.
///
/// Malformed input yields [`Geometry::default`].
pub fn parse_console_mode(text: &str) -> Geometry {
    if text == MAX_SENTINEL {
        return Geometry::maximum();
    }

    parse_dimensions(text)
        .map(|(width, height)| Geometry {
            width,
            height,
            bits_per_pixel: 0,
            use_maximum: false,
        })
        .unwrap_or_default()
}
