//! Numeric shadow recipes.

/// One layer of a (possibly inset) box shadow.
///
/// `strength` is added to `--shadow-strength` to get the layer's alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowLayer {
    pub inset: bool,
    pub x: i32,
    pub y: i32,
    pub blur: i32,
    pub spread: i32,
    pub strength: u32,
}

const fn outer(y: i32, blur: i32, spread: i32, strength: u32) -> ShadowLayer {
    ShadowLayer {
        inset: false,
        x: 0,
        y,
        blur,
        spread,
        strength,
    }
}

const fn inset(y: i32, blur: i32, spread: i32, strength: u32) -> ShadowLayer {
    ShadowLayer {
        inset: true,
        x: 0,
        y,
        blur,
        spread,
        strength,
    }
}

/// A named inner shadow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InnerShadow {
    pub layer: ShadowLayer,
    /// Whether `--inner-shadow-highlight` is layered on top.
    pub highlight: bool,
}

/// Layers for `--shadow-1` through `--shadow-10`.
pub const DROP_SHADOWS: [&[ShadowLayer]; 10] = [
    &[outer(1, 2, -1, 9)],
    &[outer(3, 5, -2, 3), outer(7, 14, -5, 5)],
    &[
        outer(-1, 3, 0, 2),
        outer(1, 2, -5, 2),
        outer(2, 5, -5, 4),
        outer(4, 12, -5, 5),
        outer(12, 15, -5, 7),
    ],
    &[
        outer(-2, 5, 0, 2),
        outer(1, 1, -2, 3),
        outer(2, 2, -2, 3),
        outer(5, 5, -2, 4),
        outer(9, 9, -2, 5),
        outer(16, 16, -2, 6),
    ],
    &[
        outer(-1, 2, 0, 2),
        outer(2, 1, -2, 3),
        outer(5, 5, -2, 3),
        outer(10, 10, -2, 4),
        outer(20, 20, -2, 5),
        outer(40, 40, -2, 7),
    ],
    &[
        outer(-1, 2, 0, 2),
        outer(3, 2, -2, 3),
        outer(7, 5, -2, 3),
        outer(12, 10, -2, 4),
        outer(22, 18, -2, 5),
        outer(41, 33, -2, 6),
        outer(100, 80, -2, 7),
    ],
    &[
        outer(-1, 2, 0, 2),
        outer(4, 3, -2, 3),
        outer(9, 7, -2, 3),
        outer(16, 14, -2, 4),
        outer(28, 24, -2, 5),
        outer(52, 44, -2, 6),
        outer(130, 100, -2, 7),
        outer(200, 140, -2, 8),
    ],
    &[
        outer(-1, 2, 0, 2),
        outer(5, 4, -2, 3),
        outer(11, 9, -2, 3),
        outer(20, 16, -2, 4),
        outer(36, 28, -2, 5),
        outer(65, 50, -2, 6),
        outer(160, 120, -2, 7),
        outer(250, 180, -2, 8),
    ],
    &[
        outer(-1, 2, 0, 2),
        outer(6, 5, -2, 3),
        outer(13, 11, -2, 3),
        outer(24, 20, -2, 4),
        outer(44, 36, -2, 5),
        outer(80, 64, -2, 6),
        outer(200, 150, -2, 7),
        outer(320, 240, -2, 8),
    ],
    &[
        outer(-1, 2, 0, 2),
        outer(7, 6, -2, 3),
        outer(15, 13, -2, 3),
        outer(28, 24, -2, 4),
        outer(52, 44, -2, 5),
        outer(96, 80, -2, 6),
        outer(240, 180, -2, 7),
        outer(400, 300, -2, 8),
    ],
];

/// `--inner-shadow-0` through `--inner-shadow-10`.
pub const INNER_SHADOWS: [InnerShadow; 11] = [
    InnerShadow { layer: inset(0, 0, 1, 9), highlight: false },
    InnerShadow { layer: inset(1, 2, 0, 9), highlight: true },
    InnerShadow { layer: inset(1, 4, 0, 9), highlight: true },
    InnerShadow { layer: inset(2, 8, 0, 9), highlight: true },
    InnerShadow { layer: inset(2, 14, 0, 9), highlight: true },
    InnerShadow { layer: inset(3, 20, 0, 9), highlight: true },
    InnerShadow { layer: inset(4, 28, 0, 10), highlight: true },
    InnerShadow { layer: inset(5, 36, 0, 11), highlight: true },
    InnerShadow { layer: inset(6, 48, 0, 12), highlight: true },
    InnerShadow { layer: inset(8, 64, 0, 13), highlight: true },
    InnerShadow { layer: inset(10, 80, 0, 14), highlight: true },
];

/// Hairline highlight layered on inner shadows, light mode.
pub const HIGHLIGHT_LIGHT: &str = "inset 0 -.5px 0 0 #fff, inset 0 .5px 0 0 #0001";

/// Hairline highlight layered on inner shadows, dark mode.
pub const HIGHLIGHT_DARK: &str = "inset 0 -.5px 0 0 #fff1, inset 0 .5px 0 0 #0007";
