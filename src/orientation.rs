//! Orientation states of individual pieces.

use crate::error::TryFromIntToEnumError;

/// The twist of a corner relative to its home orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Twist {
    /// The U/D sticker is on the U/D face.
    #[default]
    Oriented = 0,
    /// Twisted clockwise once.
    Clockwise = 1,
    /// Twisted anticlockwise once.
    AntiClockwise = 2,
}

impl Twist {
    /// Twist clockwise once more.
    pub fn clockwise(self) -> Self {
        self.twist_by(Twist::Clockwise)
    }

    /// Twist anticlockwise once more.
    pub fn anticlockwise(self) -> Self {
        self.twist_by(Twist::AntiClockwise)
    }

    /// Add two twists.
    pub fn twist_by(self, other: Twist) -> Self {
        match (self as u8 + other as u8) % 3 {
            0 => Twist::Oriented,
            1 => Twist::Clockwise,
            _ => Twist::AntiClockwise,
        }
    }

    /// The twist that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Twist::Oriented => Twist::Oriented,
            Twist::Clockwise => Twist::AntiClockwise,
            Twist::AntiClockwise => Twist::Clockwise,
        }
    }
}

impl From<Twist> for u8 {
    fn from(t: Twist) -> u8 {
        t as u8
    }
}

impl TryFrom<u8> for Twist {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Twist::Oriented),
            1 => Ok(Twist::Clockwise),
            2 => Ok(Twist::AntiClockwise),
            _ => Err(TryFromIntToEnumError::OutOfBounds),
        }
    }
}

/// Whether a block is the right way up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Flip {
    /// Right way up.
    #[default]
    Oriented = 0,
    /// Upside down.
    Flipped = 1,
}

impl Flip {
    /// Turn the block over.
    pub fn flip(self) -> Self {
        match self {
            Flip::Oriented => Flip::Flipped,
            Flip::Flipped => Flip::Oriented,
        }
    }

    /// Add two flips.
    pub fn flip_by(self, other: Flip) -> Self {
        match other {
            Flip::Oriented => self,
            Flip::Flipped => self.flip(),
        }
    }
}

impl From<Flip> for u8 {
    fn from(f: Flip) -> u8 {
        f as u8
    }
}

impl TryFrom<u8> for Flip {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Flip::Oriented),
            1 => Ok(Flip::Flipped),
            _ => Err(TryFromIntToEnumError::OutOfBounds),
        }
    }
}
