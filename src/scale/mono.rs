//! Fixed black/white contextual scales and mix reference colours.
//!
//! These are literal lightness values, not derived from any ramp.

use crate::types::TokenTable;

use super::Reference;

/// `--color-black-{0..10}` lightness, light mode (black foreground toward near-white).
const BLACK_LIGHT: [u8; 11] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95];

/// `--color-black-{0..10}` lightness, dark mode (white foreground toward near-black).
const BLACK_DARK: [u8; 11] = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 5];

/// `--color-white-{0..10}` lightness, light mode (white foreground toward mid-gray).
const WHITE_LIGHT: [u8; 11] = [100, 95, 90, 85, 80, 75, 70, 65, 60, 55, 50];

/// `--color-white-{0..10}` lightness, dark mode (black foreground toward mid-gray).
const WHITE_DARK: [u8; 11] = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50];

fn grey(lightness: u8) -> String {
    format!("hsl(0 0% {}%)", lightness)
}

/// The reference colours extrapolated steps mix toward.
pub fn references() -> TokenTable {
    let mut table = TokenTable::new();
    for reference in [Reference::White, Reference::Black] {
        table.insert(reference.token(), format!("hsl({})", reference.sample()));
    }
    table
}

/// The `--color-black-*` and `--color-white-*` scales, light and dark.
pub fn mono_scales() -> TokenTable {
    let mut table = TokenTable::new();

    for (family, light, dark) in [
        ("black", &BLACK_LIGHT, &BLACK_DARK),
        ("white", &WHITE_LIGHT, &WHITE_DARK),
    ] {
        for (i, (l, d)) in light.iter().zip(dark.iter()).enumerate() {
            table.insert_both(&format!("--color-{}-{}", family, i), grey(*l), grey(*d));
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references() {
        let table = references();
        assert_eq!(table.get("--base-white"), Some("hsl(0 0% 100%)"));
        assert_eq!(table.get("--base-black"), Some("hsl(0 0% 0%)"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_mono_scale_endpoints() {
        let table = mono_scales();
        assert_eq!(table.len(), 44);

        assert_eq!(table.get("--color-black-0"), Some("hsl(0 0% 0%)"));
        assert_eq!(table.get("--color-white-0"), Some("hsl(0 0% 100%)"));
        assert_eq!(table.get("--color-black-10"), Some("hsl(0 0% 95%)"));
        assert_eq!(table.get("--color-white-10"), Some("hsl(0 0% 50%)"));
        assert_eq!(table.get("--color-black-10-@media:dark"), Some("hsl(0 0% 5%)"));
        assert_eq!(table.get("--color-white-10-@media:dark"), Some("hsl(0 0% 50%)"));
    }

    #[test]
    fn test_dark_mode_swaps_black_and_white() {
        let table = mono_scales();
        assert_eq!(
            table.get("--color-black-0-@media:dark"),
            table.get("--color-white-0")
        );
        assert_eq!(
            table.get("--color-white-0-@media:dark"),
            table.get("--color-black-0")
        );
    }
}
