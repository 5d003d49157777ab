//! NSPIRE statistical unit-sampling table.

/// Ordered `(max total units, required sample)` steps. A property's
/// sample is the entry for the first threshold at or above its total
/// unit count. Kept as the explicit regulatory table, not a formula.
const SAMPLE_TABLE: &[(i64, u32)] = &[
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (5, 5),
    (6, 6),
    (7, 6),
    (8, 7),
    (9, 7),
    (10, 8),
    (12, 9),
    (14, 10),
    (16, 11),
    (18, 12),
    (21, 13),
    (24, 14),
    (27, 15),
    (30, 16),
    (35, 17),
    (39, 18),
    (45, 19),
    (51, 20),
    (59, 21),
    (67, 22),
    (78, 23),
    (92, 24),
    (110, 25),
    (133, 26),
    (166, 27),
    (214, 28),
    (295, 29),
    (455, 30),
    (920, 31),
];

/// Sample above the largest tabulated property size.
const MAX_SAMPLE: u32 = 32;

/// Required inspected-sample size for a property with `total_units`
/// dwelling units. Pure and total: non-positive counts yield 0.
pub fn sample_size(total_units: i64) -> u32 {
    if total_units <= 0 {
        return 0;
    }
    for &(threshold, sample) in SAMPLE_TABLE {
        if total_units <= threshold {
            return sample;
        }
    }
    MAX_SAMPLE
}
