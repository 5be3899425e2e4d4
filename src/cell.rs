use std::fmt::{Display, Formatter};

use strum::EnumIs;

/// The highest count a revealed tile can show.
pub const MAX_COUNT: u8 = 8;

/// The canonical value of a single cell, decided once at the capture boundary.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, EnumIs)]
pub enum Tile {
    /// A covered cell.
    #[default]
    Unknown,
    /// An uncovered cell showing the number of mines around it, `0..=8`.
    Revealed(u8),
    /// A cell marked as a mine.
    Flag,
    /// An exploded mine. Seeing one anywhere means the game is lost.
    Mine,
    /// Anything the capture side could not classify. Never a deduction source, but still occupies a neighbour slot.
    Unrecognized,
}

impl Tile {
    /// A revealed tile showing `count`, or `None` if no tile can show that count.
    pub fn revealed(count: u8) -> Option<Self> {
        (count <= MAX_COUNT).then_some(Self::Revealed(count))
    }

    /// The count shown by this tile, if it is revealed.
    #[inline]
    pub fn count(&self) -> Option<u8> {
        match self {
            Self::Revealed(n) => Some(*n),
            _ => None,
        }
    }

    /// Read one whitespace-free token of the text board format.
    ///
    /// Returns `None` for `S`, which only ever marks a deduction and cannot appear on a captured board.
    /// Every token outside the alphabet reads as [`Tile::Unrecognized`].
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "-" => Self::Unknown,
            "F" => Self::Flag,
            "M" => Self::Mine,
            "S" => return None,
            _ => match token.parse::<u8>().ok().and_then(Self::revealed) {
                Some(tile) => tile,
                None => Self::Unrecognized,
            },
        })
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Unknown => write!(f, "-"),
            Tile::Revealed(n) => write!(f, "{}", n),
            Tile::Flag => write!(f, "F"),
            Tile::Mine => write!(f, "M"),
            Tile::Unrecognized => write!(f, "?"),
        }
    }
}

/// A deduction produced by the rule engine for a single cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, EnumIs)]
pub enum Mark {
    /// The cell is certainly a mine.
    Flag,
    /// The cell is certainly free of mines.
    Safe,
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Mark::Flag => 'F',
            Mark::Safe => 'S',
        })
    }
}

/// A cell of the board produced by the rule engine: either an ordinary tile or the transient safe marker.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, EnumIs)]
pub enum Inferred {
    /// A tile carried over from, or flagged on top of, the input board.
    Tile(Tile),
    /// An unknown cell deduced to be safe this round.
    Safe,
}

impl Inferred {
    /// The mark this cell carries, if any.
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Inferred::Tile(Tile::Flag) => Some(Mark::Flag),
            Inferred::Safe => Some(Mark::Safe),
            Inferred::Tile(_) => None,
        }
    }
}

impl Default for Inferred {
    fn default() -> Self {
        Self::Tile(Tile::default())
    }
}

impl From<Tile> for Inferred {
    fn from(value: Tile) -> Self {
        Self::Tile(value)
    }
}

impl PartialEq<Tile> for Inferred {
    fn eq(&self, other: &Tile) -> bool {
        matches!(self, Inferred::Tile(tile) if tile == other)
    }
}

impl Display for Inferred {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Inferred::Tile(tile) => write!(f, "{}", tile),
            Inferred::Safe => write!(f, "S"),
        }
    }
}
