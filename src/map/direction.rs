use bitflags::bitflags;
use glam::IVec2;
use strum_macros::AsRefStr;

/// The four cardinal directions, declared in turn-priority order.
///
/// When two turns score equally the earlier variant wins, so the declaration
/// order doubles as the arcade tie-break (Up, Right, Down, Left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    #[default]
    Left,
}

impl Direction {
    /// The four cardinal directions in priority order.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as a unit vector, with +y pointing down the board.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Returns the direction as a usize (0-3), useful for indexing.
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Whether this direction moves along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// The matching single-bit [`Openings`] value.
    pub const fn as_opening(self) -> Openings {
        match self {
            Direction::Up => Openings::UP,
            Direction::Right => Openings::RIGHT,
            Direction::Down => Openings::DOWN,
            Direction::Left => Openings::LEFT,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}

bitflags! {
    /// Which neighbours of a tile are walkable.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Openings: u8 {
        const UP = 1 << 0;
        const RIGHT = 1 << 1;
        const DOWN = 1 << 2;
        const LEFT = 1 << 3;
    }
}

impl Openings {
    /// Whether the neighbour in `direction` is open.
    pub fn is_open(self, direction: Direction) -> bool {
        self.contains(direction.as_opening())
    }

    /// Closes the neighbour in `direction`.
    pub fn close(&mut self, direction: Direction) {
        self.remove(direction.as_opening());
    }

    /// Number of open neighbours.
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Open directions in priority order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::DIRECTIONS.into_iter().filter(move |&d| self.is_open(d))
    }
}
