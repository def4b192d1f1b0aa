// src/machines.rs

/// One machine row from the export.
///
/// `id` is the key everything else reconciles against. The export
/// enforces no uniqueness, so duplicate ids are kept as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    pub id: String,
    pub name: String,
    /// May be empty; the export leaves it blank for uncategorized gear.
    pub category: String,
    /// Free-text status label, e.g. "Active".
    pub status: String,
}

impl Machine {
    /// Short display form used by status lines and logs.
    pub fn label(&self) -> String {
        join!(&self.id, " - ", &self.name)
    }
}
