//! Chunk index ownership.
//!
//! Chunk models may contain the same value twice, so ownership is tracked per
//! index in [`CharacterState::chunk_assignments`]. Every entry `index →
//! attribute` must agree with that attribute's `assigned_chunk` value.

use super::CharacterState;
use crate::tables::Attribute;

impl CharacterState {
    /// Chunk values of the selected model; empty for free points or no model.
    pub fn chunks(&self) -> &'static [i32] {
        self.distribution_model.map_or(&[], |model| model.chunks())
    }

    pub fn uses_chunks(&self) -> bool {
        self.distribution_model
            .is_some_and(|model| model.uses_chunks())
    }

    /// Attribute currently holding the chunk at `index`.
    pub fn chunk_holder(&self, index: usize) -> Option<Attribute> {
        self.chunk_assignments.get(&index).copied()
    }

    /// Chunk index held by `attribute`.
    pub fn chunk_index_of(&self, attribute: Attribute) -> Option<usize> {
        self.chunk_assignments
            .iter()
            .find_map(|(&index, &holder)| (holder == attribute).then_some(index))
    }

    /// Chunk indices not held by any attribute, ascending.
    pub fn available_chunk_indices(&self) -> Vec<usize> {
        (0..self.chunks().len())
            .filter(|index| !self.chunk_assignments.contains_key(index))
            .collect()
    }

    pub fn unassigned_chunk_count(&self) -> usize {
        self.available_chunk_indices().len()
    }

    /// Rebuilds the ownership map so it agrees with the attribute values.
    ///
    /// Entries pointing past the model, disagreeing with the holder's value or
    /// duplicating a holder are dropped. Attributes left with a value but no
    /// index take the first free index with that value, in attribute order;
    /// when none is free the attribute is unassigned. Under free points or
    /// without a model the map is emptied.
    pub fn reconcile_chunk_assignments(&mut self) {
        if !self.uses_chunks() {
            self.chunk_assignments.clear();
            return;
        }
        let chunks = self.chunks();

        let mut seen = Vec::with_capacity(Attribute::ALL.len());
        let attributes = &self.attributes;
        self.chunk_assignments.retain(|&index, &mut holder| {
            let valid = chunks.get(index).copied() == attributes.get(holder).assigned_chunk
                && !seen.contains(&holder);
            if valid {
                seen.push(holder);
            }
            valid
        });

        for attribute in Attribute::ALL {
            if seen.contains(&attribute) {
                continue;
            }
            let Some(value) = self.attributes.get(attribute).assigned_chunk else {
                continue;
            };
            let free = (0..chunks.len())
                .find(|index| chunks[*index] == value && !self.chunk_assignments.contains_key(index));
            match free {
                Some(index) => {
                    self.chunk_assignments.insert(index, attribute);
                }
                None => self.attributes.get_mut(attribute).assigned_chunk = None,
            }
        }
    }
}
