use crate::script::ScriptRange;

/// Identifier of the Tamil script.
pub const TAMIL_SCRIPT: &str = "ta";

/// Offset of KA, the first cell of the plosive grid.
pub const PLOSIVE_GRID_START: u32 = 0x15;

/// Last offset bucketed by the grid arithmetic.
pub const PLOSIVE_GRID_END: u32 = 0x2E;

/// Manner columns per row of the grid: unvoiced, unvoiced aspirated, voiced,
/// voiced aspirated, nasal.
pub const GRID_COLUMNS: u32 = 5;

/// An adjustment to coordinated offsets, selected by the target script.
///
/// Rules see the target's [`ScriptRange`] and may key on its id or its block.
/// Rules run after an offset is known to be inside the coordinated range and
/// before it is re-based onto the target block.
pub trait OffsetRule {
    fn applies_to(&self, target: &ScriptRange) -> bool;
    fn adjust(&self, offset: u32) -> u32;
}

pub(crate) const DEFAULT_RULES: &[&dyn OffsetRule] = &[&TamilPlosiveCollapse];

/// Folds plosives onto the unvoiced, unaspirated column when writing Tamil.
///
/// Selected by the target id `ta`, whatever block a custom table gives it.
/// Tamil has no letters for aspirated or voiced plosives, so every cell of a
/// grid row maps to the row start: ख, ग and घ all become க. The fold is lossy
/// and a Tamil round trip does not restore the original consonant.
pub struct TamilPlosiveCollapse;

impl TamilPlosiveCollapse {
    /// Row-start offset for `offset`; offsets outside the grid or already in
    /// the first column are returned as is.
    pub fn collapse(offset: u32) -> u32 {
        if !(PLOSIVE_GRID_START..=PLOSIVE_GRID_END).contains(&offset) {
            return offset;
        }
        let column = (offset - PLOSIVE_GRID_START) % GRID_COLUMNS;
        offset - column
    }
}

impl OffsetRule for TamilPlosiveCollapse {
    fn applies_to(&self, target: &ScriptRange) -> bool {
        target.id == TAMIL_SCRIPT
    }

    fn adjust(&self, offset: u32) -> u32 {
        Self::collapse(offset)
    }
}
