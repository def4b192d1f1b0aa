// src/session.rs
//
// In-memory reconciliation state for one stocktake: the roster from
// the latest import plus the set of ids checked off as present.
// Owned by whoever drives it (GUI app or CLI run); nothing global.

use std::collections::HashSet;

use crate::machines::Machine;

#[derive(Clone, Debug, Default)]
pub struct InventorySession {
    roster: Vec<Machine>,
    present: HashSet<String>,
}

impl InventorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster wholesale and clear the present set.
    /// There is no incremental merge; every import starts over.
    pub fn reset(&mut self, roster: Vec<Machine>) {
        self.roster = roster;
        self.present.clear();
    }

    pub fn roster(&self) -> &[Machine] {
        &self.roster
    }

    pub fn is_present(&self, id: &str) -> bool {
        self.present.contains(id)
    }

    pub fn present_count(&self) -> usize {
        self.present.len()
    }

    /// Flip one id's present mark and return the new state.
    /// Ids not on the roster are allowed; nothing validates them.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.present.remove(id) {
            false
        } else {
            self.present.insert(s!(id));
            true
        }
    }

    /// Returns false if the id was already marked.
    pub fn mark_present(&mut self, id: &str) -> bool {
        self.present.insert(s!(id))
    }

    /// Mark every roster machine whose status is in `statuses`.
    /// Idempotent and additive; returns how many ids were new.
    pub fn mark_present_by_statuses(&mut self, statuses: &[String]) -> usize {
        let mut added = 0;
        for m in &self.roster {
            if statuses.iter().any(|s| *s == m.status) && self.present.insert(m.id.clone()) {
                added += 1;
            }
        }
        added
    }

    /// Roster machines whose id contains `query`, in roster order.
    /// Case-sensitive; the empty query keeps everything.
    pub fn filter_by_id(&self, query: &str) -> Vec<&Machine> {
        self.roster
            .iter()
            .filter(|m| query.is_empty() || m.id.contains(query))
            .collect()
    }

    /// Roster machines not yet marked present, in roster order.
    pub fn missing(&self) -> Vec<&Machine> {
        self.roster
            .iter()
            .filter(|m| !self.present.contains(&m.id))
            .collect()
    }

    /// First roster machine with this exact id.
    pub fn find_by_id(&self, id: &str) -> Option<&Machine> {
        self.roster.iter().find(|m| m.id == id)
    }

    /// Status labels in first-seen roster order, for the bulk-mark picker.
    pub fn distinct_statuses(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for m in &self.roster {
            if seen.insert(m.status.as_str()) {
                out.push(m.status.clone());
            }
        }
        out
    }
}
