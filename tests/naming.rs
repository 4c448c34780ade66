//! Validates preset table lookups, fallback naming, and collision claims

use sheetsplit::geometry::grid::CellPosition;
use sheetsplit::naming::preset::{OFFICERS_4X6, PresetChoice, PresetEntry, PresetTable};
use sheetsplit::naming::resolver::NameResolver;

// Tests the canonical name mapping of the officer layout
#[test]
fn test_officer_preset_named_slots() {
    assert_eq!(
        OFFICERS_4X6.lookup(CellPosition { row: 1, col: 1 }),
        Some(PresetEntry::Named("dong_zhuo"))
    );
    assert_eq!(
        OFFICERS_4X6.lookup(CellPosition { row: 4, col: 6 }),
        Some(PresetEntry::Named("player_default"))
    );
}

// Tests that the designated duplicate slots are excluded, not named
#[test]
fn test_officer_preset_excluded_slots() {
    assert_eq!(
        OFFICERS_4X6.lookup(CellPosition { row: 2, col: 6 }),
        Some(PresetEntry::Excluded)
    );
    assert_eq!(
        OFFICERS_4X6.lookup(CellPosition { row: 3, col: 6 }),
        Some(PresetEntry::Excluded)
    );
}

// Tests that positions outside the 4x6 layout are absent entirely
#[test]
fn test_officer_preset_uncovered_positions() {
    assert_eq!(OFFICERS_4X6.lookup(CellPosition { row: 1, col: 7 }), None);
    assert_eq!(OFFICERS_4X6.lookup(CellPosition { row: 5, col: 1 }), None);
    assert_eq!(OFFICERS_4X6.len(), 24);
    assert!(!OFFICERS_4X6.is_empty());
}

// Tests the CLI choice to table resolution
#[test]
fn test_preset_choice_resolution() {
    assert!(PresetChoice::None.table().is_none());
    assert_eq!(
        PresetChoice::Officers4x6.table().map(PresetTable::len),
        Some(24)
    );
}

// Tests sequential fallback naming: 1-based row-major index, zero-padded
#[test]
fn test_fallback_names_are_row_major_and_padded() {
    let resolver = NameResolver::new("portrait", 7);

    assert_eq!(resolver.fallback_name(0, 0), "portrait_01");
    assert_eq!(resolver.fallback_name(0, 6), "portrait_07");
    assert_eq!(resolver.fallback_name(1, 0), "portrait_08");
    assert_eq!(resolver.fallback_name(3, 6), "portrait_28");
}

// Tests that a second claim of the same name reports a collision
#[test]
fn test_claim_rejects_within_run_collisions() {
    let mut resolver = NameResolver::new("portrait", 7);

    assert!(resolver.claim("guan_yu"));
    assert!(resolver.is_used("guan_yu"));
    assert!(!resolver.claim("guan_yu"));
    assert!(resolver.claim("zhao_yun"));
}
