//! Live pointer contacts.

use glam::DVec2;

/// Opaque token identifying one pointer contact, supplied by the host.
pub type ContactId = u64;

/// Attractor positions keyed by contact, kept in insertion order so that
/// ties between equidistant attractors resolve the same way every tick.
#[derive(Debug, Clone, Default)]
pub struct AttractorSet {
    ids: Vec<ContactId>,
    positions: Vec<DVec2>,
}

impl AttractorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new contact. Returns `false` if the id is already live.
    pub fn add(&mut self, id: ContactId, position: DVec2) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        self.positions.push(position);
        true
    }

    /// Move a live contact. Returns `false` for an unknown id.
    pub fn move_to(&mut self, id: ContactId, position: DVec2) -> bool {
        match self.index_of(id) {
            Some(idx) => {
                self.positions[idx] = position;
                true
            }
            None => false,
        }
    }

    /// End a contact. Returns `false` for an unknown id.
    pub fn remove(&mut self, id: ContactId) -> bool {
        match self.index_of(id) {
            Some(idx) => {
                self.ids.remove(idx);
                self.positions.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ContactId) -> Option<DVec2> {
        self.index_of(id).map(|idx| self.positions[idx])
    }

    /// Positions of all live contacts, oldest first.
    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.positions.clear();
    }

    fn index_of(&self, id: ContactId) -> Option<usize> {
        self.ids.iter().position(|&live| live == id)
    }
}
