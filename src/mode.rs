// CLASSIFICATION: COMMUNITY
// Filename: mode.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! Symbolic mode resolution for input and console configuration strings.
//!
//! Each mode family has a fixed, case-sensitive name table and a fallback
//! that is applied to anything not in the table. Resolution is total: every
//! string maps to exactly one variant.

use log::warn;
use serde::Serialize;

/// Closed enumeration selected from a configuration string.
pub trait SymbolicMode: Copy + Sized + 'static {
    /// Configuration field the mode is read from, used in diagnostics.
    const FIELD: &'static str;
    /// Recognised names in lookup order.
    const TABLE: &'static [(&'static str, Self)];
    /// Value used when the name is not in [`Self::TABLE`].
    const FALLBACK: Self;

    /// Resolve `name`, warning when it falls back.
    fn resolve(name: &str) -> Self {
        match Self::lookup(name) {
            Some(mode) => mode,
            None => {
                warn!("Invalid {} {:?}", Self::FIELD, name);
                Self::FALLBACK
            }
        }
    }

    /// Exact table lookup without fallback or diagnostics.
    fn lookup(name: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, mode)| *mode)
    }
}

/// Pointer emulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PointerMode {
    /// ASUS firmware pointer protocol.
    #[serde(rename = "ASUS")]
    Asus,
    /// No pointer emulation; the initializer is not invoked.
    Disabled,
}

impl PointerMode {
    /// Returns `true` if the pointer initializer should run.
    pub fn is_enabled(self) -> bool {
        self != PointerMode::Disabled
    }
}

impl SymbolicMode for PointerMode {
    const FIELD: &'static str = "input pointer mode";
    const TABLE: &'static [(&'static str, Self)] = &[("ASUS", PointerMode::Asus)];
    const FALLBACK: Self = PointerMode::Disabled;
}

/// Keyboard keycode emulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyMode {
    /// Pick the best available keyboard protocol.
    Auto,
    /// Apple key map protocol v1.
    V1,
    /// Apple key map protocol v2.
    V2,
    /// AMI keyboard protocol.
    #[serde(rename = "AMI")]
    Ami,
    /// No keycode emulation; the initializer is not invoked.
    Disabled,
}

impl KeyMode {
    /// Returns `true` if the keycode initializer should run.
    pub fn is_enabled(self) -> bool {
        self != KeyMode::Disabled
    }
}

impl SymbolicMode for KeyMode {
    const FIELD: &'static str = "input key mode";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("Auto", KeyMode::Auto),
        ("V1", KeyMode::V1),
        ("V2", KeyMode::V2),
        ("AMI", KeyMode::Ami),
    ];
    const FALLBACK: Self = KeyMode::Disabled;
}

/// Console text renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RendererMode {
    /// Built-in renderer drawing on the graphics output surface.
    #[default]
    BuiltinGraphics,
    /// Firmware renderer in graphics mode.
    SystemGraphics,
    /// Firmware renderer in text mode.
    SystemText,
    /// Firmware renderer without console control mode switches.
    SystemGeneric,
}

impl SymbolicMode for RendererMode {
    const FIELD: &'static str = "text renderer";
    // An empty string selects the default without a warning.
    const TABLE: &'static [(&'static str, Self)] = &[
        ("BuiltinGraphics", RendererMode::BuiltinGraphics),
        ("SystemGraphics", RendererMode::SystemGraphics),
        ("SystemText", RendererMode::SystemText),
        ("SystemGeneric", RendererMode::SystemGeneric),
        ("", RendererMode::BuiltinGraphics),
    ];
    const FALLBACK: Self = RendererMode::BuiltinGraphics;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_modes() {
        assert_eq!(PointerMode::resolve("ASUS"), PointerMode::Asus);
        assert_eq!(PointerMode::resolve("asus"), PointerMode::Disabled);
        assert_eq!(PointerMode::resolve(""), PointerMode::Disabled);
        assert!(!PointerMode::Disabled.is_enabled());
    }

    #[test]
    fn key_modes() {
        assert_eq!(KeyMode::resolve("Auto"), KeyMode::Auto);
        assert_eq!(KeyMode::resolve("V1"), KeyMode::V1);
        assert_eq!(KeyMode::resolve("V2"), KeyMode::V2);
        assert_eq!(KeyMode::resolve("AMI"), KeyMode::Ami);
        assert_eq!(KeyMode::resolve("Ami"), KeyMode::Disabled);
        assert_eq!(KeyMode::resolve("Bogus"), KeyMode::Disabled);
    }

    #[test]
    fn renderer_never_disables() {
        assert_eq!(RendererMode::resolve(""), RendererMode::BuiltinGraphics);
        assert_eq!(RendererMode::resolve("SystemText"), RendererMode::SystemText);
        assert_eq!(RendererMode::resolve("SystemGeneric"), RendererMode::SystemGeneric);
        assert_eq!(RendererMode::resolve("SystemGraphics"), RendererMode::SystemGraphics);
        assert_eq!(RendererMode::resolve("systemtext"), RendererMode::BuiltinGraphics);
    }

    #[test]
    fn lookup_has_no_fallback() {
        assert_eq!(KeyMode::lookup("Bogus"), None);
        assert_eq!(RendererMode::lookup(""), Some(RendererMode::BuiltinGraphics));
        assert_eq!(PointerMode::lookup("Disabled"), None);
    }

    #[test]
    fn resolution_is_total() {
        for name in ["", "ASUS", "Auto", "V2", "SystemText", "\u{0}", "🟢", "Max"] {
            assert_eq!(
                PointerMode::resolve(name),
                PointerMode::lookup(name).unwrap_or(PointerMode::FALLBACK)
            );
            assert_eq!(KeyMode::resolve(name), KeyMode::lookup(name).unwrap_or(KeyMode::FALLBACK));
            assert_eq!(
                RendererMode::resolve(name),
                RendererMode::lookup(name).unwrap_or(RendererMode::FALLBACK)
            );
        }
    }
}
