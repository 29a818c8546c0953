//! The published physical-suggestibility percentage chart.
//!
//! 21 rows (q1 score from 100 down to 0 in steps of 5) by 31 columns
//! (combined score from 50 through 200 in steps of 5), each cell the
//! physical percentage for that score pair. Values are transcribed from the
//! published score chart and must never be re-derived; `tests/chart.rs`
//! guards the transcription with a full-grid checksum and per-row sums.

const ROWS: usize = 21;
const COLS: usize = 31;

/// Row order matches the published chart: q1 = 100 at the top, 0 at the
/// bottom. Column 0 is combined = 50, column 30 is combined = 200.
#[rustfmt::skip]
static PHYSICAL_PERCENTAGE: [[u8; COLS]; ROWS] = [
    [100, 100, 95, 91, 87, 83, 80, 77, 74, 71, 69, 67, 65, 63, 61, 59, 57, 56, 54, 53, 51, 50, 49, 48, 47, 46, 45, 44, 43, 42, 41],
    [100, 100, 95, 90, 86, 83, 79, 76, 73, 70, 68, 66, 63, 61, 59, 58, 56, 54, 53, 51, 50, 49, 48, 47, 46, 45, 44, 43, 42, 41, 40],
    [100, 100, 95, 90, 86, 82, 78, 75, 72, 69, 67, 64, 62, 60, 58, 56, 55, 53, 51, 50, 49, 47, 46, 45, 44, 43, 42, 41, 40, 39, 38],
    [100, 100, 94, 89, 85, 81, 77, 74, 71, 68, 65, 63, 61, 59, 57, 55, 53, 52, 50, 49, 47, 46, 45, 44, 43, 42, 41, 40, 39, 38, 37],
    [100, 100, 94, 89, 84, 80, 76, 73, 70, 67, 64, 62, 59, 57, 55, 53, 52, 50, 48, 47, 46, 44, 43, 42, 41, 40, 39, 38, 37, 36, 35],
    [100, 100, 94, 88, 83, 79, 75, 71, 68, 65, 63, 60, 58, 56, 54, 52, 50, 48, 47, 45, 44, 43, 42, 41, 39, 38, 38, 37, 36, 35, 34],
    [100, 100, 93, 88, 82, 78, 74, 70, 67, 64, 61, 58, 56, 54, 52, 50, 48, 47, 45, 44, 42, 41, 40, 39, 38, 37, 36, 35, 34, 33, 32],
    [100, 100, 93, 87, 81, 76, 72, 68, 65, 62, 59, 57, 54, 52, 50, 48, 46, 45, 43, 42, 41, 39, 38, 37, 36, 35, 34, 33, 33, 32, 31],
    [100, 100, 92, 86, 80, 75, 71, 67, 63, 60, 57, 55, 52, 50, 48, 46, 44, 43, 41, 40, 39, 38, 36, 35, 34, 33, 32, 32, 31, 30, 29],
    [100, 100, 92, 85, 79, 73, 69, 65, 61, 58, 55, 52, 50, 48, 46, 44, 42, 41, 39, 38, 37, 35, 34, 33, 32, 31, 31, 30, 29, 28, 28],
    [100, 100, 91, 83, 77, 71, 67, 63, 59, 56, 53, 50, 48, 45, 43, 42, 40, 38, 37, 36, 34, 33, 32, 31, 30, 29, 29, 28, 27, 26, 26],
    [90, 90, 82, 75, 69, 64, 60, 56, 53, 50, 47, 45, 43, 41, 39, 38, 36, 35, 33, 32, 31, 30, 29, 28, 27, 26, 26, 25, 24, 24, 23],
    [80, 80, 73, 67, 62, 57, 53, 50, 47, 44, 42, 40, 38, 36, 35, 33, 32, 31, 30, 29, 28, 27, 26, 25, 24, 24, 23, 22, 22, 21, 21],
    [70, 70, 64, 58, 54, 50, 47, 44, 41, 39, 37, 35, 33, 32, 30, 29, 28, 27, 26, 25, 24, 23, 23, 22, 21, 21, 20, 19, 19, 18, 18],
    [60, 60, 55, 50, 46, 43, 40, 38, 35, 33, 32, 30, 29, 27, 26, 25, 24, 23, 22, 21, 21, 20, 19, 19, 18, 18, 17, 17, 16, 16, 15],
    [50, 50, 45, 42, 38, 36, 33, 31, 29, 28, 26, 25, 24, 23, 22, 21, 20, 19, 19, 18, 17, 17, 16, 16, 15, 15, 14, 14, 14, 13, 13],
    [40, 40, 36, 33, 31, 29, 27, 25, 24, 22, 21, 20, 19, 18, 17, 17, 16, 15, 15, 14, 14, 13, 13, 13, 12, 12, 11, 11, 11, 11, 10],
    [30, 30, 27, 25, 23, 21, 20, 19, 18, 17, 16, 15, 14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 10, 9, 9, 9, 9, 8, 8, 8, 8],
    [20, 20, 18, 17, 15, 14, 13, 13, 12, 11, 11, 10, 10, 9, 9, 8, 8, 8, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6, 5, 5, 5],
    [10, 10, 9, 8, 8, 7, 7, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Exact chart lookup. `None` when either coordinate is off the grid.
pub fn lookup(q1: i32, combined: i32) -> Option<u8> {
    if !(0..=100).contains(&q1) || q1 % 5 != 0 {
        return None;
    }
    if !(50..=200).contains(&combined) || combined % 5 != 0 {
        return None;
    }
    let row = ((100 - q1) / 5) as usize;
    let col = ((combined - 50) / 5) as usize;
    Some(PHYSICAL_PERCENTAGE[row][col])
}
