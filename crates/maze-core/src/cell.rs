//! The [`CellKind`] type: what occupies a single maze cell.

use std::fmt;

/// The kind of a maze cell.
///
/// `Path` never appears in loaded input: it is the overlay painted onto a
/// solved maze to mark the discovered route.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    Start,
    End,
    #[default]
    Open,
    Path,
}

impl CellKind {
    pub const WALL: char = '#';
    pub const START: char = 'S';
    pub const END: char = 'E';
    pub const PATH: char = '.';
    pub const OPEN: char = ' ';

    /// Decode an input character. Both `.` and space are open floor on input.
    /// Returns `None` for characters the maze format does not define.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::WALL => Some(Self::Wall),
            Self::START => Some(Self::Start),
            Self::END => Some(Self::End),
            '.' | ' ' => Some(Self::Open),
            _ => None,
        }
    }

    /// Output character for this cell.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Wall => Self::WALL,
            Self::Start => Self::START,
            Self::End => Self::END,
            Self::Open => Self::OPEN,
            Self::Path => Self::PATH,
        }
    }

    /// Whether a walker may stand on this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Start and End keep their marker even when the path crosses them.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_space_both_load_as_open() {
        assert_eq!(CellKind::from_char('.'), Some(CellKind::Open));
        assert_eq!(CellKind::from_char(' '), Some(CellKind::Open));
        assert_eq!(CellKind::from_char('x'), None);
    }

    #[test]
    fn open_renders_as_space_and_path_as_dot() {
        assert_eq!(CellKind::Open.to_char(), ' ');
        assert_eq!(CellKind::Path.to_char(), '.');
        assert_eq!(CellKind::Wall.to_string(), "#");
    }

    #[test]
    fn only_walls_block() {
        assert!(!CellKind::Wall.is_passable());
        for k in [CellKind::Start, CellKind::End, CellKind::Open, CellKind::Path] {
            assert!(k.is_passable());
        }
    }
}
