use serde::{Deserialize, Serialize};

/// A resolved cell coordinate on the grid.
///
/// Unsigned on purpose: negative positions cannot be expressed, so the only
/// bounds check left is against the grid's upper dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this position by a signed delta. Returns `None` if either
    /// component would go negative.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_within_range() {
        let p = CellPos::new(5, 5);
        assert_eq!(p.offset(-1, 1), Some(CellPos::new(4, 6)));
    }

    #[test]
    fn offset_below_zero_is_none() {
        let p = CellPos::new(0, 3);
        assert_eq!(p.offset(-1, 0), None);
        assert_eq!(CellPos::new(3, 0).offset(0, -1), None);
    }

    #[test]
    fn display_format() {
        assert_eq!(CellPos::new(2, 7).to_string(), "(2, 7)");
    }
}
