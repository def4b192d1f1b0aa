// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub import: ImportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            import: ImportOptions::default(),
        }
    }
}

/// Where each machine field sits in an exported table row.
/// Kept as data (not inline literals) so the mapping can be audited
/// and tested apart from the parsing mechanics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub category: usize,
    pub id: usize,
    pub name: usize,
    pub status: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            category: COL_CATEGORY,
            id: COL_ID,
            name: COL_NAME,
            status: COL_STATUS,
        }
    }
}

impl ColumnMap {
    /// Shortest row that can still be read. Shorter rows are dropped.
    pub fn min_row_len(&self) -> usize {
        self.category
            .max(self.id)
            .max(self.name)
            .max(self.status)
            + 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportOptions {
    pub columns: ColumnMap,
    /// Leading rows skipped unconditionally, headers by position.
    pub header_rows: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            header_rows: HEADER_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_row_len_covers_widest_offset() {
        assert_eq!(ColumnMap::default().min_row_len(), 8);

        let tight = ColumnMap { category: 0, id: 1, name: 2, status: 3 };
        assert_eq!(tight.min_row_len(), 4);
    }
}
