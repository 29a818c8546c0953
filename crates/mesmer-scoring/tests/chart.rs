use mesmer_scoring::chart;

/// Sum of every cell in the published chart; guards transcription drift.
const GRID_CHECKSUM: u32 = 26311;

/// Per-row sums, q1 = 100 at index 0 down to q1 = 0 at index 20.
const ROW_SUMS: [u32; 21] = [
    1968, 1936, 1897, 1865, 1821, 1783, 1738, 1689, 1639, 1585, 1524, 1371, 1222, 1067, 915, 763,
    610, 459, 305, 154, 0,
];

#[test]
fn full_grid_checksum_matches_published_chart() {
    let mut total: u32 = 0;
    for q1 in (0..=100).step_by(5) {
        for combined in (50..=200).step_by(5) {
            total += u32::from(chart::lookup(q1, combined).unwrap());
        }
    }
    assert_eq!(total, GRID_CHECKSUM);
}

#[test]
fn row_sums_match_published_chart() {
    for (row, q1) in (0..=100).rev().step_by(5).enumerate() {
        let sum: u32 = (50..=200)
            .step_by(5)
            .map(|combined| u32::from(chart::lookup(q1, combined).unwrap()))
            .sum();
        assert_eq!(sum, ROW_SUMS[row], "row sum mismatch at q1={q1}");
    }
}

#[test]
fn published_spot_values() {
    assert_eq!(chart::lookup(100, 50), Some(100));
    assert_eq!(chart::lookup(100, 200), Some(41));
    assert_eq!(chart::lookup(0, 50), Some(0));
    assert_eq!(chart::lookup(0, 200), Some(0));
    assert_eq!(chart::lookup(50, 105), Some(50));
    assert_eq!(chart::lookup(45, 95), Some(50));
    assert_eq!(chart::lookup(20, 50), Some(40));
    assert_eq!(chart::lookup(60, 90), Some(63));
    assert_eq!(chart::lookup(75, 130), Some(50));
    assert_eq!(chart::lookup(35, 75), Some(50));
    assert_eq!(chart::lookup(90, 125), Some(56));
    assert_eq!(chart::lookup(15, 150), Some(10));
    assert_eq!(chart::lookup(5, 200), Some(3));
}

#[test]
fn percentages_decrease_along_the_combined_axis() {
    for q1 in (0..=100).step_by(5) {
        let mut previous = chart::lookup(q1, 50).unwrap();
        for combined in (55..=200).step_by(5) {
            let current = chart::lookup(q1, combined).unwrap();
            assert!(current <= previous, "increase at q1={q1}, combined={combined}");
            previous = current;
        }
    }
}

#[test]
fn percentages_increase_along_the_q1_axis() {
    for combined in (50..=200).step_by(5) {
        let mut previous = chart::lookup(0, combined).unwrap();
        for q1 in (5..=100).step_by(5) {
            let current = chart::lookup(q1, combined).unwrap();
            assert!(current >= previous, "decrease at q1={q1}, combined={combined}");
            previous = current;
        }
    }
}

#[test]
fn off_grid_coordinates_are_absent() {
    assert_eq!(chart::lookup(3, 50), None);
    assert_eq!(chart::lookup(50, 52), None);
    assert_eq!(chart::lookup(-5, 100), None);
    assert_eq!(chart::lookup(105, 100), None);
    assert_eq!(chart::lookup(50, 45), None);
    assert_eq!(chart::lookup(50, 205), None);
}
