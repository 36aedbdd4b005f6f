// CLASSIFICATION: COMMUNITY
// Filename: parser_props.rs v0.1
// Date Modified: 2026-10-16
// Author: Lukas Bower

use cohesix_inout::geometry::{parse_console_mode, parse_screen_resolution, Geometry};
use cohesix_inout::{KeyMode, PointerMode, RendererMode, SymbolicMode};
use proptest::prelude::*;

fn digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn console_form(text: &str) -> bool {
    match text.split_once('x') {
        Some((w, h)) => digits(w) && digits(h),
        None => false,
    }
}

fn resolution_form(text: &str) -> bool {
    match text.split_once('@') {
        Some((dims, bpp)) => console_form(dims) && digits(bpp),
        None => false,
    }
}

// Arbitrary text plus near misses built from the grammar's own characters.
fn geometry_text() -> impl Strategy<Value = String> {
    prop_oneof![any::<String>(), "[0-9xX@Max +\\-\n]{0,24}"]
}

fn mode_name() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        prop::sample::select(vec![
            "", "ASUS", "asus", "Auto", "V1", "V2", "AMI", "BuiltinGraphics",
            "SystemGraphics", "SystemText", "SystemGeneric", "Disabled",
        ])
        .prop_map(String::from),
    ]
}

fn resolves_within_table<M: SymbolicMode + PartialEq + std::fmt::Debug>(name: &str) {
    let mode = M::resolve(name);
    assert_eq!(mode, M::lookup(name).unwrap_or(M::FALLBACK));
    assert!(mode == M::FALLBACK || M::TABLE.iter().any(|(_, m)| *m == mode));
}

proptest! {
    #[test]
    fn resolution_round_trips((w, h, b) in any::<(u32, u32, u32)>()) {
        let g = parse_screen_resolution(&format!("{w}x{h}@{b}"));
        prop_assert_eq!(g, Geometry { width: w, height: h, bits_per_pixel: b, use_maximum: false });
    }

    #[test]
    fn console_mode_round_trips((w, h) in any::<(u32, u32)>()) {
        let g = parse_console_mode(&format!("{w}x{h}"));
        prop_assert_eq!(g, Geometry { width: w, height: h, bits_per_pixel: 0, use_maximum: false });
    }

    #[test]
    fn malformed_resolution_is_no_override(text in geometry_text()) {
        prop_assume!(text != "Max" && !resolution_form(&text));
        prop_assert_eq!(parse_screen_resolution(&text), Geometry::default());
    }

    #[test]
    fn malformed_console_mode_is_no_override(text in geometry_text()) {
        prop_assume!(text != "Max" && !console_form(&text));
        prop_assert_eq!(parse_console_mode(&text), Geometry::default());
    }

    #[test]
    fn mode_resolution_is_total(name in mode_name()) {
        resolves_within_table::<PointerMode>(&name);
        resolves_within_table::<KeyMode>(&name);
        resolves_within_table::<RendererMode>(&name);
    }
}
