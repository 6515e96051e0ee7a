use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the four fixed turn-order positions. Players are assigned seats
/// in join order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

/// A partnership of the two same-parity seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Team {
    AC = 0,
    BD = 1,
}

impl Seat {
    pub const LOOP: [Seat; 4] = [Seat::A, Seat::B, Seat::C, Seat::D];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::A),
            1 => Some(Seat::B),
            2 => Some(Seat::C),
            3 => Some(Seat::D),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::C,
            Seat::C => Seat::D,
            Seat::D => Seat::A,
        }
    }

    pub const fn team(self) -> Team {
        match self {
            Seat::A | Seat::C => Team::AC,
            Seat::B | Seat::D => Team::BD,
        }
    }
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::AC, Team::BD];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opponent(self) -> Team {
        match self {
            Team::AC => Team::BD,
            Team::BD => Team::AC,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::A => "A",
            Seat::B => "B",
            Seat::C => "C",
            Seat::D => "D",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Team::AC => "A/C",
            Team::BD => "B/D",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::{Seat, Team};

    #[test]
    fn next_wraps_around() {
        assert_eq!(Seat::D.next(), Seat::A);
    }

    #[test]
    fn same_parity_seats_are_partners() {
        assert_eq!(Seat::A.team(), Team::AC);
        assert_eq!(Seat::C.team(), Team::AC);
        assert_eq!(Seat::B.team(), Team::BD);
        assert_eq!(Seat::D.team(), Team::BD);
    }

    #[test]
    fn opponent_flips_teams() {
        assert_eq!(Team::AC.opponent(), Team::BD);
        assert_eq!(Team::BD.opponent(), Team::AC);
    }

    #[test]
    fn index_roundtrip() {
        for (i, seat) in Seat::LOOP.iter().enumerate() {
            assert_eq!(Seat::from_index(i), Some(*seat));
            assert_eq!(seat.index(), i);
        }
    }
}
