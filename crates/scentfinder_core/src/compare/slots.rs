//! Fixed compare slots.

use crate::compare::analyzer::{compare, ComparisonResult};
use crate::config::DiscoveryConfig;
use crate::model::fragrance::{Fragrance, FragranceId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of slots on the compare page.
pub const COMPARE_SLOT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    OutOfRange { slot: usize, available: usize },
    /// The fragrance already occupies another slot.
    AlreadySelected {
        fragrance_id: FragranceId,
        slot: usize,
    },
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { slot, available } => {
                write!(f, "compare slot {slot} out of range ({available} slots)")
            }
            Self::AlreadySelected { fragrance_id, slot } => {
                write!(f, "fragrance {fragrance_id} already selected in slot {slot}")
            }
        }
    }
}

impl Error for SlotError {}

/// Compare slots; empty slots are skipped when analyzing.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareSlots {
    slots: Vec<Option<Fragrance>>,
}

impl Default for CompareSlots {
    fn default() -> Self {
        Self::new(COMPARE_SLOT_COUNT)
    }
}

impl CompareSlots {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    pub fn with_config(config: &DiscoveryConfig) -> Self {
        Self::new(config.normalized().compare_slots)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<&Fragrance> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Places `fragrance` in `slot`, returning the fragrance it replaced.
    pub fn fill(
        &mut self,
        slot: usize,
        fragrance: Fragrance,
    ) -> Result<Option<Fragrance>, SlotError> {
        self.check_range(slot)?;
        if let Some(existing) = self.slot_of(fragrance.id) {
            if existing != slot {
                return Err(SlotError::AlreadySelected {
                    fragrance_id: fragrance.id,
                    slot: existing,
                });
            }
        }
        Ok(self.slots[slot].replace(fragrance))
    }

    /// Empties `slot`, returning its previous occupant.
    pub fn clear(&mut self, slot: usize) -> Result<Option<Fragrance>, SlotError> {
        self.check_range(slot)?;
        Ok(self.slots[slot].take())
    }

    pub fn is_selected(&self, fragrance_id: FragranceId) -> bool {
        self.slot_of(fragrance_id).is_some()
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Filled slots in slot order.
    pub fn selected(&self) -> Vec<&Fragrance> {
        self.slots.iter().flatten().collect()
    }

    /// Comparison of the filled slots; `None` with fewer than two filled.
    pub fn analyze(&self) -> Option<ComparisonResult> {
        compare(&self.selected())
    }

    fn slot_of(&self, fragrance_id: FragranceId) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|fragrance| fragrance.id == fragrance_id)
        })
    }

    fn check_range(&self, slot: usize) -> Result<(), SlotError> {
        if slot < self.slots.len() {
            Ok(())
        } else {
            Err(SlotError::OutOfRange {
                slot,
                available: self.slots.len(),
            })
        }
    }
}
