//! A sticker level view of the 2x2x2, for reading states off a real cube and for printing them.
//!
//! Stickers are numbered face by face in the order U R F D L B. Each face is read left to right,
//! top to bottom, as it appears on this net:
//!
//! ```text
//!       U0 U1
//!       U2 U3
//! L0 L1 F0 F1 R0 R1 B0 B1
//! L2 L3 F2 F3 R2 R3 B2 B3
//!       D0 D1
//!       D2 D3
//! ```

use super::{Corner, Cube222};
use crate::error::StickerError;
use crate::orientation::Twist;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// A face of the cube, also used as the colour of the stickers that belong on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// Every face, in sticker order.
    pub const ARRAY: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::R => Face::L,
            Face::L => Face::R,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The stickers of each corner position, starting from the U/D sticker and going clockwise.
const CORNER_STICKERS: [[usize; 3]; 8] = [
    [3, 4, 9],
    [2, 8, 17],
    [0, 16, 21],
    [1, 20, 5],
    [13, 11, 6],
    [12, 19, 10],
    [15, 7, 22],
    [14, 23, 18],
];

/// The colours of each corner, in the same order as `CORNER_STICKERS`.
const CORNER_COLOURS: [[Face; 3]; 8] = {
    use Face::*;
    [
        [U, R, F],
        [U, F, L],
        [U, L, B],
        [U, B, R],
        [D, F, R],
        [D, L, F],
        [D, R, B],
        [D, B, L],
    ]
};

/// A 2x2x2 described by the colour of each of its 24 stickers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickerCube222 {
    /// The stickers, numbered as in the module documentation.
    pub stickers: [Face; 24],
}

impl StickerCube222 {
    /// The solved cube.
    pub const SOLVED: StickerCube222 = {
        use Face::*;
        StickerCube222 {
            stickers: [
                U, U, U, U, R, R, R, R, F, F, F, F, D, D, D, D, L, L, L, L, B, B, B, B,
            ],
        }
    };

    /// Read a cube from 24 characters, one per sticker, using any six distinct characters as
    /// colours. The colour scheme is worked out from the corner in the DBL position, so the cube
    /// may be held in any orientation.
    pub fn from_colours(s: &str) -> Result<Self, StickerError> {
        let colours: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if colours.len() != 24 {
            return Err(StickerError::WrongLength(colours.len()));
        }

        let mut counts: HashMap<char, usize> = HashMap::new();
        for &c in &colours {
            *counts.entry(c).or_default() += 1;
        }
        if counts.len() != 6 || counts.values().any(|&n| n != 4) {
            return Err(StickerError::ColourCount);
        }

        // Colours that share a corner can't be on opposite faces.
        let mut touching: HashSet<(char, char)> = HashSet::new();
        for pos in CORNER_STICKERS {
            for a in pos {
                for b in pos {
                    touching.insert((colours[a], colours[b]));
                }
            }
        }
        let opposite = |c: char| -> Result<char, StickerError> {
            let mut candidates = counts.keys().filter(|&&d| !touching.contains(&(c, d)));
            match (candidates.next(), candidates.next()) {
                (Some(&d), None) => Ok(d),
                _ => Err(StickerError::NoColourScheme),
            }
        };

        let [d, b, l] = CORNER_STICKERS[Corner::DBL as usize].map(|i| colours[i]);
        let scheme: HashMap<char, Face> = [
            (opposite(d)?, Face::U),
            (opposite(l)?, Face::R),
            (opposite(b)?, Face::F),
            (d, Face::D),
            (l, Face::L),
            (b, Face::B),
        ]
        .into_iter()
        .collect();
        if scheme.len() != 6 {
            return Err(StickerError::NoColourScheme);
        }

        let mut stickers = [Face::U; 24];
        for (sticker, c) in stickers.iter_mut().zip(colours) {
            *sticker = scheme[&c];
        }
        Ok(StickerCube222 { stickers })
    }
}

impl FromStr for StickerCube222 {
    type Err = StickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_colours(s)
    }
}

impl From<Cube222> for StickerCube222 {
    fn from(cube: Cube222) -> Self {
        let mut stickers = StickerCube222::SOLVED.stickers;

        for (i, pos) in CORNER_STICKERS.iter().enumerate() {
            let colours = CORNER_COLOURS[cube.cp[i] as usize];
            let ori = cube.co[i] as usize;
            for (n, &colour) in colours.iter().enumerate() {
                stickers[pos[(n + ori) % 3]] = colour;
            }
        }

        StickerCube222 { stickers }
    }
}

impl TryFrom<&StickerCube222> for Cube222 {
    type Error = StickerError;

    fn try_from(s: &StickerCube222) -> Result<Self, Self::Error> {
        let mut cube = Cube222::SOLVED;

        for (i, pos) in CORNER_STICKERS.iter().enumerate() {
            let ori = pos
                .iter()
                .position(|&p| matches!(s.stickers[p], Face::U | Face::D))
                .ok_or(StickerError::InvalidCorner(i))?;
            let first = s.stickers[pos[ori]];
            let col1 = s.stickers[pos[(ori + 1) % 3]];
            let col2 = s.stickers[pos[(ori + 2) % 3]];

            let j = CORNER_COLOURS
                .iter()
                .position(|c| *c == [first, col1, col2])
                .ok_or(StickerError::InvalidCorner(i))?;

            cube.cp[i] = Corner::ARRAY[j];
            cube.co[i] = match ori {
                0 => Twist::Oriented,
                1 => Twist::Clockwise,
                _ => Twist::AntiClockwise,
            };
        }

        if !cube.is_permutation() {
            return Err(StickerError::DuplicateCorner);
        }
        if cube.co_parity() != Twist::Oriented {
            return Err(StickerError::Twisted);
        }
        Ok(cube)
    }
}

impl TryFrom<StickerCube222> for Cube222 {
    type Error = StickerError;

    fn try_from(s: StickerCube222) -> Result<Self, Self::Error> {
        Cube222::try_from(&s)
    }
}

impl fmt::Display for StickerCube222 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = |face: Face, row: usize| {
            let base = face as usize * 4 + row * 2;
            format!("{}{}", self.stickers[base], self.stickers[base + 1])
        };

        for row in 0..2 {
            writeln!(f, "   {}", face(Face::U, row))?;
        }
        for row in 0..2 {
            writeln!(
                f,
                "{} {} {} {}",
                face(Face::L, row),
                face(Face::F, row),
                face(Face::R, row),
                face(Face::B, row)
            )?;
        }
        for row in 0..2 {
            writeln!(f, "   {}", face(Face::D, row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube222::Move222;
    use crate::moves::MoveSequence;

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn letters(s: &StickerCube222) -> String {
        s.stickers.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn solved_stickers() {
        assert_eq!(StickerCube222::from(Cube222::SOLVED), StickerCube222::SOLVED);
        assert_eq!(
            letters(&StickerCube222::SOLVED),
            "UUUURRRRFFFFDDDDLLLLBBBB"
        );
        assert_eq!(Cube222::try_from(&StickerCube222::SOLVED), Ok(Cube222::SOLVED));
    }

    #[test]
    fn r_stickers() {
        let cube = Cube222::SOLVED.make_moves("R".parse().unwrap());
        let stickers = StickerCube222::from(cube.clone());
        assert_eq!(letters(&stickers), "UFUFRRRRFDFDDBDBLLLLUBUB");
        assert_eq!(
            "wgwgrrrrgygyybyboooowbwb".parse::<StickerCube222>(),
            Ok(stickers)
        );
    }

    #[test]
    fn any_orientation_is_accepted() {
        // a solved cube held with R facing the front
        let held = "UUUU BBBB RRRR DDDD FFFF LLLL".parse::<StickerCube222>().unwrap();
        assert_eq!(Cube222::try_from(held), Ok(Cube222::SOLVED));
    }

    #[test]
    fn sticker_errors() {
        assert_eq!(
            "UUUURRRR".parse::<StickerCube222>(),
            Err(StickerError::WrongLength(8))
        );
        assert_eq!(
            "UUUUURRRFFFFDDDDLLLLBBBB".parse::<StickerCube222>(),
            Err(StickerError::ColourCount)
        );

        let mut twisted = StickerCube222::SOLVED;
        twisted.stickers.swap(3, 4);
        twisted.stickers.swap(4, 9);
        assert_eq!(Cube222::try_from(&twisted), Err(StickerError::Twisted));

        let mut bad = StickerCube222::SOLVED;
        bad.stickers.swap(3, 4);
        assert_eq!(Cube222::try_from(&bad), Err(StickerError::InvalidCorner(0)));

        let mut dup = StickerCube222::SOLVED;
        for (a, b) in CORNER_STICKERS[0].into_iter().zip(CORNER_STICKERS[1]) {
            dup.stickers[b] = dup.stickers[a];
        }
        assert_eq!(Cube222::try_from(&dup), Err(StickerError::DuplicateCorner));

        // D shares the UFR corner with U, so D touches every other colour and has no opposite
        let mut no_scheme = StickerCube222::SOLVED;
        no_scheme.stickers.swap(4, 13);
        assert_eq!(
            letters(&no_scheme).parse::<StickerCube222>(),
            Err(StickerError::NoColourScheme)
        );
    }

    #[test]
    fn prints_a_net() {
        let net = StickerCube222::SOLVED.to_string();
        assert_eq!(net.lines().count(), 6);
        assert_eq!(net.lines().nth(2), Some("LL FF RR BB"));
    }

    proptest! {
        #[test]
        fn stickers_round_trip(mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence)) {
            let cube = Cube222::SOLVED.make_moves(mvs);
            let stickers = StickerCube222::from(cube.clone());
            prop_assert_eq!(Cube222::try_from(&stickers), Ok(cube.clone()));

            let colours: String = stickers.stickers.iter().map(|f| match f {
                Face::U => 'w', Face::R => 'r', Face::F => 'g',
                Face::D => 'y', Face::L => 'o', Face::B => 'b',
            }).collect();
            prop_assert_eq!(colours.parse::<StickerCube222>(), Ok(stickers));
        }
    }
}
