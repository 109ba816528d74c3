use serde::{Deserialize, Serialize};

/// Player-set marker on an unrevealed cell. Pure state storage: flags never
/// gate the reveal or win logic in this crate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    #[default]
    None,
    Flagged,
    Questioned,
}

impl Flag {
    /// Next marker in the usual cycle: None -> Flagged -> Questioned -> None.
    pub const fn cycled(self) -> Self {
        match self {
            Self::None => Self::Flagged,
            Self::Flagged => Self::Questioned,
            Self::Questioned => Self::None,
        }
    }
}

/// One grid position. `mines_touching` is `Some` only for non-mine cells
/// once seeding has run, and never changes afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_revealed: bool,
    pub is_mine: bool,
    pub flag: Flag,
    pub mines_touching: Option<u8>,
}

impl Cell {
    pub const fn is_zero(self) -> bool {
        matches!(self.mines_touching, Some(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_hidden_and_unmarked() {
        let cell = Cell::default();
        assert!(!cell.is_revealed);
        assert!(!cell.is_mine);
        assert_eq!(cell.flag, Flag::None);
        assert_eq!(cell.mines_touching, None);
    }

    #[test]
    fn flag_cycle_returns_to_none() {
        let flag = Flag::None;
        assert_eq!(flag.cycled(), Flag::Flagged);
        assert_eq!(flag.cycled().cycled(), Flag::Questioned);
        assert_eq!(flag.cycled().cycled().cycled(), Flag::None);
    }
}
