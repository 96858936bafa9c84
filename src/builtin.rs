//! Built-in hue families.
//!
//! Thirteen-sample ramps from near-white (index 0) to near-black (index 12),
//! stored as whole-number HSL triples.

use crate::types::{HueSample, HueSampleSet, SAMPLE_COUNT};

/// Stock hue ramps, in emission order.
const HUES: [(&str, [(u16, u8, u8); SAMPLE_COUNT]); 19] = [
    (
        "gray",
        [
            (210, 17, 98), (210, 17, 95), (210, 16, 93), (210, 14, 89),
            (210, 14, 83), (210, 11, 71), (210, 7, 56), (210, 9, 31),
            (210, 10, 23), (210, 11, 15), (214, 14, 10), (216, 16, 6),
            (210, 40, 2),
        ],
    ),
    (
        "stone",
        [
            (200, 27, 98), (210, 18, 96), (210, 11, 93), (192, 9, 89),
            (197, 8, 83), (202, 5, 71), (200, 3, 60), (180, 2, 50),
            (160, 1, 41), (90, 1, 31), (60, 3, 22), (60, 6, 14),
            (60, 6, 7),
        ],
    ),
    (
        "red",
        [
            (0, 100, 98), (0, 100, 95), (0, 100, 89), (0, 100, 83),
            (0, 100, 76), (0, 100, 71), (0, 94, 65), (0, 86, 59),
            (0, 74, 54), (0, 65, 48), (0, 65, 42), (0, 65, 36),
            (0, 66, 30),
        ],
    ),
    (
        "pink",
        [
            (336, 100, 97), (336, 100, 94), (338, 91, 87), (339, 90, 81),
            (339, 88, 74), (339, 82, 67), (339, 76, 59), (339, 67, 52),
            (339, 68, 45), (339, 69, 38), (339, 70, 32), (339, 69, 27),
            (339, 70, 21),
        ],
    ),
    (
        "purple",
        [
            (280, 67, 96), (287, 77, 92), (288, 86, 86), (289, 85, 78),
            (288, 83, 71), (288, 75, 64), (288, 67, 58), (288, 56, 52),
            (288, 54, 46), (288, 54, 40), (288, 55, 33), (288, 56, 26),
            (288, 55, 20),
        ],
    ),
    (
        "violet",
        [
            (252, 100, 97), (257, 100, 93), (256, 100, 87), (255, 94, 79),
            (255, 93, 72), (255, 91, 67), (255, 86, 63), (255, 78, 60),
            (255, 67, 55), (255, 53, 50), (255, 53, 44), (255, 53, 37),
            (255, 53, 31),
        ],
    ),
    (
        "indigo",
        [
            (223, 100, 96), (225, 100, 93), (228, 100, 86), (228, 100, 78),
            (228, 96, 72), (228, 94, 67), (228, 89, 63), (228, 81, 59),
            (228, 69, 55), (230, 57, 50), (230, 57, 43), (230, 57, 37),
            (230, 57, 30),
        ],
    ),
    (
        "blue",
        [
            (205, 100, 95), (206, 100, 91), (206, 100, 82), (206, 96, 72),
            (207, 91, 64), (207, 86, 57), (208, 80, 52), (208, 77, 47),
            (209, 77, 43), (209, 75, 38), (209, 76, 32), (209, 75, 27),
            (209, 76, 21),
        ],
    ),
    (
        "cyan",
        [
            (185, 81, 94), (185, 84, 88), (186, 77, 77), (187, 74, 65),
            (187, 69, 55), (188, 72, 47), (187, 80, 42), (188, 83, 37),
            (189, 85, 32), (189, 85, 28), (189, 84, 23), (190, 84, 17),
            (189, 84, 12),
        ],
    ),
    (
        "teal",
        [
            (161, 79, 95), (160, 85, 87), (162, 78, 77), (162, 72, 65),
            (162, 68, 54), (162, 73, 46), (162, 82, 40), (162, 87, 35),
            (162, 88, 30), (162, 88, 26), (162, 89, 21), (162, 88, 16),
            (162, 89, 11),
        ],
    ),
    (
        "green",
        [
            (131, 67, 95), (128, 76, 90), (128, 71, 82), (129, 68, 73),
            (130, 61, 64), (130, 57, 56), (131, 50, 50), (131, 53, 46),
            (131, 54, 40), (132, 52, 35), (132, 52, 29), (132, 53, 22),
            (131, 53, 16),
        ],
    ),
    (
        "lime",
        [
            (79, 81, 94), (80, 83, 88), (81, 81, 80), (82, 75, 69),
            (83, 73, 59), (84, 69, 51), (85, 74, 45), (85, 79, 40),
            (86, 84, 36), (85, 84, 32), (85, 83, 26), (85, 83, 21),
            (85, 84, 15),
        ],
    ),
    (
        "yellow",
        [
            (50, 100, 93), (49, 100, 87), (49, 100, 80), (48, 100, 70),
            (47, 100, 62), (45, 97, 54), (42, 96, 50), (39, 100, 48),
            (35, 100, 47), (31, 100, 45), (31, 100, 35), (31, 100, 25),
            (31, 100, 20),
        ],
    ),
    (
        "orange",
        [
            (34, 100, 95), (33, 100, 90), (33, 100, 83), (32, 100, 74),
            (31, 100, 65), (29, 100, 58), (27, 98, 54), (24, 94, 50),
            (21, 90, 48), (17, 87, 45), (17, 87, 40), (17, 87, 32),
            (17, 87, 27),
        ],
    ),
    (
        "choco",
        [
            (48, 100, 93), (35, 91, 86), (30, 85, 79), (27, 80, 72),
            (25, 75, 65), (25, 71, 57), (25, 70, 49), (25, 75, 42),
            (25, 75, 37), (25, 76, 31), (25, 71, 26), (25, 66, 21),
            (25, 65, 15),
        ],
    ),
    (
        "brown",
        [
            (36, 60, 95), (32, 44, 87), (28, 40, 80), (28, 38, 72),
            (27, 36, 65), (28, 34, 57), (28, 32, 50), (28, 35, 43),
            (28, 38, 37), (27, 42, 31), (25, 48, 25), (23, 58, 19),
            (22, 57, 16),
        ],
    ),
    (
        "sand",
        [
            (200, 27, 98), (48, 17, 88), (45, 22, 79), (44, 22, 69),
            (44, 17, 62), (44, 14, 54), (42, 14, 46), (43, 16, 39),
            (41, 15, 32), (43, 14, 26), (44, 11, 20), (60, 6, 14),
            (60, 6, 7),
        ],
    ),
    (
        "camo",
        [
            (66, 71, 95), (64, 69, 77), (65, 69, 59), (65, 61, 51),
            (63, 61, 46), (60, 62, 41), (58, 65, 36), (56, 67, 33),
            (54, 70, 29), (54, 69, 25), (53, 69, 22), (53, 69, 18),
            (52, 69, 13),
        ],
    ),
    (
        "jungle",
        [
            (74, 98, 84), (74, 79, 78), (74, 68, 71), (75, 62, 65),
            (74, 56, 59), (74, 52, 53), (74, 55, 47), (74, 66, 42),
            (74, 79, 36), (73, 90, 32), (73, 91, 26), (73, 91, 21),
            (73, 90, 16),
        ],
    ),
];

fn ramp(name: &str, samples: &[(u16, u8, u8)]) -> HueSampleSet {
    HueSampleSet::from_samples(
        name,
        samples
            .iter()
            .map(|&(h, s, l)| HueSample::new(f64::from(h), f64::from(s), f64::from(l))),
    )
}

/// Access to the built-in hue families.
pub struct BuiltinHues;

impl BuiltinHues {
    /// Every built-in hue family, keyed `--<hue>-<index>-hsl`.
    pub fn all() -> Vec<HueSampleSet> {
        HUES.iter().map(|(name, samples)| ramp(name, samples)).collect()
    }

    /// Names of the built-in hue families.
    pub fn names() -> impl Iterator<Item = &'static str> {
        HUES.iter().map(|(name, _)| *name)
    }

    /// Get one built-in hue family by name.
    pub fn get(name: &str) -> Option<HueSampleSet> {
        HUES.iter()
            .find(|(n, _)| *n == name)
            .map(|(name, samples)| ramp(name, samples))
    }
}
