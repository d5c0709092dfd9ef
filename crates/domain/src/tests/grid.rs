// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::slot_label::{
    CLOSING_HOUR, OPENING_HOUR, SLOTS_PER_DAY, SlotLabel, generate_slot_grid, operating_grid,
};

#[test]
fn test_grid_has_requested_length() {
    let grid: Vec<SlotLabel> = generate_slot_grid(6, 18).unwrap();
    assert_eq!(grid.len(), 18);
}

#[test]
fn test_grid_labels_increase_by_one_hour() {
    let grid: Vec<SlotLabel> = generate_slot_grid(9, 5).unwrap();
    for pair in grid.windows(2) {
        assert_eq!(pair[1].hour(), pair[0].hour() + 1);
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_grid_renders_expected_labels() {
    let grid: Vec<SlotLabel> = generate_slot_grid(6, 3).unwrap();
    let labels: Vec<String> = grid.iter().map(SlotLabel::label).collect();
    assert_eq!(labels, vec!["06:00", "07:00", "08:00"]);
}

#[test]
fn test_grid_rejects_zero_count() {
    let result = generate_slot_grid(6, 0);
    assert!(matches!(result, Err(DomainError::InvalidRange { .. })));
}

#[test]
fn test_grid_rejects_start_hour_past_23() {
    let result = generate_slot_grid(24, 1);
    assert!(matches!(result, Err(DomainError::InvalidRange { .. })));
}

#[test]
fn test_grid_never_wraps_past_hour_23() {
    // 20:00 + 6 slots would need a slot starting at 24:00.
    let result = generate_slot_grid(20, 6);
    assert!(matches!(result, Err(DomainError::InvalidRange { .. })));

    // 20:00 + 4 slots ends exactly at the 23:00 slot and is fine.
    let grid: Vec<SlotLabel> = generate_slot_grid(20, 4).unwrap();
    assert_eq!(grid.last().unwrap().hour(), 23);
}

#[test]
fn test_last_slot_end_label_reads_24_00() {
    let grid: Vec<SlotLabel> = generate_slot_grid(23, 1).unwrap();
    assert_eq!(grid[0].label(), "23:00");
    assert_eq!(grid[0].end_label(), "24:00");
}

#[test]
fn test_operating_grid_covers_the_full_day() {
    let grid: Vec<SlotLabel> = operating_grid();
    assert_eq!(grid.len(), SLOTS_PER_DAY);
    assert_eq!(grid.first().unwrap().hour(), OPENING_HOUR);
    assert_eq!(grid.last().unwrap().hour(), CLOSING_HOUR - 1);
    assert_eq!(grid.first().unwrap().label(), "06:00");
    assert_eq!(grid.last().unwrap().end_label(), "24:00");
}
