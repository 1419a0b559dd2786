/// Well-known starting patterns, as live-cell offsets from a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Block,
    Blinker,
    Glider,
    Toad,
    Beacon,
    RPentomino,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Glider,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::RPentomino,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Blinker => "blinker",
            Self::Glider => "glider",
            Self::Toad => "toad",
            Self::Beacon => "beacon",
            Self::RPentomino => "r-pentomino",
        }
    }

    /// `(row, col)` offsets of the live cells.
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Self::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Self::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Self::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Self::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            Self::Beacon => &[
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
            ],
            Self::RPentomino => &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        }
    }

    /// Bounding box as `(rows, cols)`.
    pub fn extent(self) -> (usize, usize) {
        self.cells()
            .iter()
            .fold((0, 0), |(r, c), &(dr, dc)| (r.max(dr + 1), c.max(dc + 1)))
    }

    /// Look up a pattern by name, ignoring case. `_` is accepted for `-`.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|p| p.name() == wanted)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Pattern::from_name("Glider"), Some(Pattern::Glider));
        assert_eq!(Pattern::from_name("R_PENTOMINO"), Some(Pattern::RPentomino));
        assert_eq!(Pattern::from_name("spaceship"), None);
    }

    #[test]
    fn names_round_trip() {
        for p in Pattern::ALL {
            assert_eq!(Pattern::from_name(p.name()), Some(p));
        }
    }

    #[test]
    fn extents() {
        assert_eq!(Pattern::Block.extent(), (2, 2));
        assert_eq!(Pattern::Blinker.extent(), (1, 3));
        assert_eq!(Pattern::Beacon.extent(), (4, 4));
    }
}
