//! Fixed grid-position naming tables

use crate::geometry::grid::CellPosition;
use clap::ValueEnum;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// One slot of a preset table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetEntry {
    /// Canonical output name for this slot
    Named(&'static str),
    /// Slot is part of the layout but deliberately not exported
    Excluded,
}

/// Immutable mapping from 1-based grid positions to canonical names
///
/// Loaded once at startup as process-wide read-only configuration; positions
/// absent from the table are not part of the preset at all.
#[derive(Debug)]
pub struct PresetTable {
    entries: BTreeMap<CellPosition, PresetEntry>,
}

impl PresetTable {
    /// Build a table from 1-based (row, column, entry) triples
    ///
    /// Later triples for the same position overwrite earlier ones.
    pub fn from_entries(entries: &[(u32, u32, PresetEntry)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|&(row, col, entry)| (CellPosition { row, col }, entry))
                .collect(),
        }
    }

    /// Look up a 1-based grid position
    ///
    /// `None` means the position is not covered by the preset; `Excluded`
    /// means it is covered but must be skipped.
    pub fn lookup(&self, position: CellPosition) -> Option<PresetEntry> {
        self.entries.get(&position).copied()
    }

    /// Number of positions the table covers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table covers no positions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Preset selection exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetChoice {
    /// No preset; every cell uses the sequential fallback name
    None,
    /// Officer portrait layout, 4 rows by 6 named columns
    #[value(name = "officers-4x6", alias = "officers_4x6")]
    Officers4x6,
}

impl PresetChoice {
    /// Resolve the selected fixed table, if any
    pub fn table(self) -> Option<&'static PresetTable> {
        match self {
            Self::None => None,
            Self::Officers4x6 => Some(&OFFICERS_4X6),
        }
    }
}

/// Officer portrait sheet layout: 22 named slots plus two excluded duplicates
pub static OFFICERS_4X6: LazyLock<PresetTable> = LazyLock::new(|| {
    PresetTable::from_entries(&[
        (1, 1, PresetEntry::Named("dong_zhuo")),
        (1, 2, PresetEntry::Named("lu_bu")),
        (1, 3, PresetEntry::Named("li_ru")),
        (1, 4, PresetEntry::Named("hua_xiong")),
        (1, 5, PresetEntry::Named("cao_cao")),
        (1, 6, PresetEntry::Named("xun_yu")),
        (2, 1, PresetEntry::Named("xiahou_dun")),
        (2, 2, PresetEntry::Named("xiahou_yuan")),
        (2, 3, PresetEntry::Named("zhao_yun")),
        (2, 4, PresetEntry::Named("liu_bei")),
        (2, 5, PresetEntry::Named("guan_yu")),
        (2, 6, PresetEntry::Excluded), // duplicate Guan Yu
        (3, 1, PresetEntry::Named("zhang_fei")),
        (3, 2, PresetEntry::Named("sun_jian")),
        (3, 3, PresetEntry::Named("huang_gai")),
        (3, 4, PresetEntry::Named("cheng_pu")),
        (3, 5, PresetEntry::Named("yuan_shao")),
        (3, 6, PresetEntry::Excluded), // extra scholar
        (4, 1, PresetEntry::Named("yan_liang")),
        (4, 2, PresetEntry::Named("wen_chou")),
        (4, 3, PresetEntry::Named("yuan_shu")),
        (4, 4, PresetEntry::Named("ji_ling")),
        (4, 5, PresetEntry::Named("diaochan")),
        (4, 6, PresetEntry::Named("player_default")),
    ])
});
