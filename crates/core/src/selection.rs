// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use slot_board_domain::{SlotLabel, SlotStatus};
use std::collections::{BTreeMap, BTreeSet};

/// The set of slots the current actor has tentatively chosen.
///
/// A selection exists only in the current session's memory for one
/// `(activity, date)` pair: it is cleared when either changes and after a
/// successful dispatch. All operations return a new set; the previous value
/// is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    /// The selected slots, in chronological order.
    slots: BTreeSet<SlotLabel>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeSet::new(),
        }
    }

    /// Toggles a slot in or out of the selection.
    ///
    /// Toggling a slot whose status forbids selection (booked, blocked, or
    /// past), or a slot that is not on the grid at all, is a defensive
    /// no-op that returns the selection unchanged — the UI should never
    /// offer that path, but the tracker does not rely on it.
    #[must_use]
    pub fn toggle(&self, slot: SlotLabel, statuses: &BTreeMap<SlotLabel, SlotStatus>) -> Self {
        let selectable: bool = statuses.get(&slot).is_some_and(|s| s.is_selectable());
        if !selectable {
            return self.clone();
        }

        let mut slots: BTreeSet<SlotLabel> = self.slots.clone();
        if !slots.remove(&slot) {
            slots.insert(slot);
        }
        Self { slots }
    }

    /// Builds a selection from labels submitted across a trust boundary.
    ///
    /// Unlike [`Self::toggle`], this is strict: every label must be on the
    /// grid and currently selectable, otherwise the whole selection is
    /// rejected and the caller learns which slot failed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SlotNotSelectable` for a booked, blocked, or
    /// past slot, and `CoreError::SlotNotOnGrid` for a label the grid does
    /// not contain.
    pub fn try_select(
        labels: &[SlotLabel],
        statuses: &BTreeMap<SlotLabel, SlotStatus>,
    ) -> Result<Self, CoreError> {
        let mut slots: BTreeSet<SlotLabel> = BTreeSet::new();
        for &slot in labels {
            match statuses.get(&slot) {
                Some(status) if status.is_selectable() => {
                    slots.insert(slot);
                }
                Some(status) => {
                    return Err(CoreError::SlotNotSelectable {
                        slot,
                        status: *status,
                    });
                }
                None => return Err(CoreError::SlotNotOnGrid { slot }),
            }
        }
        Ok(Self { slots })
    }

    /// Resets to the empty selection.
    ///
    /// Called on `(activity, date)` change and after a successful dispatch.
    #[must_use]
    pub const fn clear(&self) -> Self {
        Self::new()
    }

    /// Returns whether the slot is currently selected.
    #[must_use]
    pub fn contains(&self, slot: SlotLabel) -> bool {
        self.slots.contains(&slot)
    }

    /// Returns the number of selected slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the selected slots in ascending chronological order.
    #[must_use]
    pub fn ordered(&self) -> Vec<SlotLabel> {
        self.slots.iter().copied().collect()
    }
}
