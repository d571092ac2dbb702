// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    convert::TryFrom,
    fmt::{self, Display},
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::CoordinateError;

/// Largest column number that column letters may encode.
pub const MAX_COLUMNS: usize = 80;

/// A cell on the board. Both axes are 1-indexed: `x` is the column (`A` is 1) and `y`
/// is the row.
///
/// Locations order by `x`, then by `y`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Location {
    /// Column of the cell.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
}

impl Location {
    /// Construct a [`Location`] from the given `x` and `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Construct a [`Location`] from column letters and a row, such as `("AB", 3)`.
    pub fn from_letters(column: &str, y: usize) -> Result<Self, CoordinateError> {
        column_index(column).map(|index| Self::new(index + 1, y))
    }
}

impl From<(usize, usize)> for Location {
    /// Construct a [`Location`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Location> for (usize, usize) {
    /// Convert the [`Location`] into an `(x, y)` pair.
    fn from(loc: Location) -> Self {
        (loc.x, loc.y)
    }
}

impl Display for Location {
    /// Formats as column letters followed by the row, e.g. `F6`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.x.checked_sub(1) {
            Some(index) => write!(f, "{}{}", column_letter(index), self.y),
            None => write!(f, "-{}", self.y),
        }
    }
}

impl FromStr for Location {
    type Err = CoordinateError;

    /// Parse either `<column><row>` or `<row><column>`, e.g. `B7` or `7b`. Column
    /// letters are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static COLUMN_FIRST: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^([A-Za-z]{1,2})(\d{1,2})$").unwrap());
        static ROW_FIRST: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d{1,2})([A-Za-z]{1,2})$").unwrap());

        let s = s.trim();
        let (column, row) = if let Some(captures) = COLUMN_FIRST.captures(s) {
            (captures[1].to_ascii_uppercase(), captures[2].to_owned())
        } else if let Some(captures) = ROW_FIRST.captures(s) {
            (captures[2].to_ascii_uppercase(), captures[1].to_owned())
        } else {
            return Err(CoordinateError::Malformed(s.to_owned()));
        };
        // At most two digits, so this can't overflow.
        let row = row
            .parse()
            .map_err(|_| CoordinateError::Malformed(s.to_owned()))?;
        Self::from_letters(&column, row)
    }
}

/// Convert a zero-based column index to its letters: `0` is `A`, `25` is `Z`, `26` is
/// `AA`, `27` is `AB` and so on.
pub fn column_letter(index: usize) -> String {
    let mut letters = String::with_capacity(2);
    if index > 25 {
        letters.push(letter(index / 26 - 1));
        letters.push(letter(index % 26));
    } else {
        letters.push(letter(index));
    }
    letters
}

/// Convert column letters back to a zero-based column index. Accepts one or two
/// letters in `'A'..='Z'` encoding a column no greater than [`MAX_COLUMNS`].
pub fn column_index(letters: &str) -> Result<usize, CoordinateError> {
    let mut chars = letters.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => Err(CoordinateError::Empty),
        (Some(c), None, _) => Ok(base26(c)? - 1),
        (Some(c1), Some(c2), None) => {
            let total = 26 * base26(c1)? + base26(c2)?;
            if total > MAX_COLUMNS {
                Err(CoordinateError::TooLarge(total))
            } else {
                Ok(total - 1)
            }
        }
        (Some(_), Some(_), Some(_)) => Err(CoordinateError::TooLong(letters.to_owned())),
    }
}

/// The letter `value` places after `A`.
fn letter(value: usize) -> char {
    u32::try_from(value)
        .ok()
        .and_then(|v| v.checked_add(u32::from(b'A')))
        .and_then(std::char::from_u32)
        .unwrap_or(std::char::REPLACEMENT_CHARACTER)
}

/// Value of a single letter where `A` is 1.
fn base26(c: char) -> Result<usize, CoordinateError> {
    match c {
        'A'..='Z' => Ok(c as usize - 'A' as usize + 1),
        _ => Err(CoordinateError::OutOfRange(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn single_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_index("A"), Ok(0));
        assert_eq!(column_index("Z"), Ok(25));
    }

    #[test]
    fn double_letters() {
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(52), "BA");
        assert_eq!(column_index("AA"), Ok(26));
        assert_eq!(column_index("AB"), Ok(27));
        assert_eq!(column_index("CB"), Ok(79));
    }

    #[test]
    fn rejects_bad_letters() {
        assert_eq!(column_index(""), Err(CoordinateError::Empty));
        assert_eq!(
            column_index("ABC"),
            Err(CoordinateError::TooLong("ABC".to_owned()))
        );
        assert_eq!(column_index("a"), Err(CoordinateError::OutOfRange('a')));
        assert_eq!(column_index("A@"), Err(CoordinateError::OutOfRange('@')));
        assert_eq!(column_index("CC"), Err(CoordinateError::TooLarge(81)));
        assert_eq!(column_index("ZZ"), Err(CoordinateError::TooLarge(702)));
    }

    #[test]
    fn from_letters_is_one_indexed() {
        assert_eq!(Location::from_letters("A", 1), Ok(Location::new(1, 1)));
        assert_eq!(Location::from_letters("F", 6), Ok(Location::new(6, 6)));
        assert_eq!(Location::from_letters("AA", 3), Ok(Location::new(27, 3)));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("F6".parse::<Location>(), Ok(Location::new(6, 6)));
        assert_eq!("6f".parse::<Location>(), Ok(Location::new(6, 6)));
        assert_eq!(" ab10 ".parse::<Location>(), Ok(Location::new(28, 10)));
        assert_eq!(Location::new(28, 10).to_string(), "AB10");
        assert_eq!(Location::new(0, 4).to_string(), "-4");
        assert!(matches!(
            "F".parse::<Location>(),
            Err(CoordinateError::Malformed(_))
        ));
        assert!(matches!(
            "F6G".parse::<Location>(),
            Err(CoordinateError::Malformed(_))
        ));
        assert_eq!("ZZ1".parse::<Location>(), Err(CoordinateError::TooLarge(702)));
    }

    #[test]
    fn orders_by_x_then_y() {
        assert!(Location::new(1, 9) < Location::new(2, 1));
        assert!(Location::new(2, 1) < Location::new(2, 2));
    }

    proptest! {
        #[test]
        fn single_letter_columns(index in 0usize..26) {
            let letters = column_letter(index);
            prop_assert_eq!(letters.chars().count(), 1);
            prop_assert_eq!(letters.chars().next(), Some((b'A' + index as u8) as char));
        }

        #[test]
        fn double_letter_columns(index in 26usize..2026) {
            let letters: Vec<char> = column_letter(index).chars().collect();
            let first = std::char::from_u32('A' as u32 + (index / 26 - 1) as u32);
            let second = std::char::from_u32('A' as u32 + (index % 26) as u32);
            prop_assert_eq!(letters.len(), 2);
            prop_assert_eq!(Some(letters[0]), first);
            prop_assert_eq!(Some(letters[1]), second);
        }

        #[test]
        fn letters_round_trip(index in 0usize..MAX_COLUMNS) {
            prop_assert_eq!(column_index(&column_letter(index)), Ok(index));
        }
    }
}
