//! Birth/survival rules compiled into a complete neighborhood lookup table.
//!
//! A rule string lists neighbor counts after a mode letter: counts after `B`
//! bring a dead cell to life (**B**irth), counts after `S` keep a live cell
//! alive (**S**urvival). Conway's Game of Life is `B3S23`. Letters are
//! case-insensitive and modes may repeat, so `b3s2s3` is also Life.
//!
//! The rule is compiled once into a 512-entry table indexed by
//! [`Neighborhood`], so evaluating a cell is a single lookup.
//!
//! # Examples
//!
//! ```
//! use lifelike_core::{Neighborhood, NeighborPosition, RuleTable};
//!
//! let rule: RuleTable = "B36S23".parse()?;
//! assert_eq!(rule.to_string(), "B36S23");
//!
//! let three = Neighborhood::EMPTY
//!     .with_cell(NeighborPosition::TopLeft, true)
//!     .with_cell(NeighborPosition::TopMiddle, true)
//!     .with_cell(NeighborPosition::TopRight, true);
//! assert!(rule.evaluate(three));
//! # Ok::<(), lifelike_core::RuleError>(())
//! ```

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::Neighborhood;

/// Rule string of Conway's Game of Life.
pub const LIFE: &str = "B3S23";

/// Rule string of Replicator, in which every pattern replicates itself.
pub const REPLICATOR: &str = "B1357S1357";

/// Named rules.
///
/// `Display` prints [`name`](Self::name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Conway's Game of Life, [`LIFE`].
    Life,
    /// Replicator, [`REPLICATOR`].
    Replicator,
}

impl Preset {
    /// All presets.
    pub const ALL: [Self; 2] = [Self::Life, Self::Replicator];

    /// Returns the human readable name of the preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Replicator => "Replicator",
        }
    }

    /// Returns the rule string of the preset.
    #[must_use]
    pub const fn rule_string(self) -> &'static str {
        match self {
            Self::Life => LIFE,
            Self::Replicator => REPLICATOR,
        }
    }

    /// Looks up a preset by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised when parsing a rule string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RuleError {
    /// The rule string was empty.
    #[display("invalid rule: the rule string is empty")]
    Empty,
    /// A neighbor count appeared before any `B` or `S`.
    #[display("invalid rule: neighbor count {digit:?} at position {position} must follow B or S")]
    DigitBeforeMode {
        /// 0-based character position.
        position: usize,
        /// The offending digit.
        digit: char,
    },
    /// A character other than `B`, `S`, or a digit was found.
    #[display(
        "invalid rule: unexpected character {found:?} at position {position}, rules may only contain B, S, and digits"
    )]
    InvalidCharacter {
        /// 0-based character position.
        position: usize,
        /// The offending character.
        found: char,
    },
}

/// A set of neighbor counts (0-9).
///
/// Counts above 8 are accepted by the grammar but never occur in a
/// Moore neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborCounts(u16);

impl NeighborCounts {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Adds `count` to the set.
    ///
    /// # Panics
    ///
    /// Panics if `count` is greater than 9.
    pub fn insert(&mut self, count: u8) {
        assert!(count <= 9, "neighbor count must be 0-9, got {count}");
        self.0 |= 1 << count;
    }

    /// Returns whether `count` is in the set.
    #[must_use]
    #[inline]
    pub const fn contains(self, count: u8) -> bool {
        count <= 9 && self.0 & (1 << count) != 0
    }

    /// Returns an iterator over the counts in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=9).filter(move |&count| self.contains(count))
    }
}

impl FromIterator<u8> for NeighborCounts {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for count in iter {
            set.insert(count);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Birth,
    Survive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    AwaitingMode,
    InMode(Mode),
}

/// A compiled life-like rule.
///
/// Maps every [`Neighborhood`] to the next state of its center cell.
/// Construction is O(512); [`evaluate`](Self::evaluate) is O(1). The table is
/// immutable, so a rule can be shared freely between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct RuleTable {
    birth: NeighborCounts,
    survival: NeighborCounts,
    table: [bool; Neighborhood::COUNT],
}

impl RuleTable {
    /// Parses and compiles a rule string such as `"B3S23"`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if the string is empty, contains a digit before
    /// the first `B`/`S`, or contains any other character.
    pub fn new(rule: &str) -> Result<Self, RuleError> {
        if rule.is_empty() {
            return Err(RuleError::Empty);
        }

        let mut birth = NeighborCounts::EMPTY;
        let mut survival = NeighborCounts::EMPTY;
        let mut state = ParseState::AwaitingMode;
        for (position, ch) in rule.chars().enumerate() {
            let count = ch.to_digit(10).and_then(|d| u8::try_from(d).ok());
            match (state, ch.to_ascii_uppercase(), count) {
                (_, 'B', _) => state = ParseState::InMode(Mode::Birth),
                (_, 'S', _) => state = ParseState::InMode(Mode::Survive),
                (ParseState::AwaitingMode, digit, Some(_)) => {
                    return Err(RuleError::DigitBeforeMode { position, digit });
                }
                (ParseState::InMode(Mode::Birth), _, Some(count)) => birth.insert(count),
                (ParseState::InMode(Mode::Survive), _, Some(count)) => survival.insert(count),
                (_, _, None) => {
                    return Err(RuleError::InvalidCharacter {
                        position,
                        found: ch,
                    });
                }
            }
        }

        Ok(Self::from_counts(birth, survival))
    }

    /// Compiles a rule from explicit birth and survival sets.
    #[must_use]
    pub fn from_counts(birth: NeighborCounts, survival: NeighborCounts) -> Self {
        let mut table = [false; Neighborhood::COUNT];
        for (slot, n) in table.iter_mut().zip(Neighborhood::all()) {
            let count = n.live_neighbors();
            *slot = if n.center() {
                survival.contains(count)
            } else {
                birth.contains(count)
            };
        }
        Self {
            birth,
            survival,
            table,
        }
    }

    /// Compiles a named rule.
    ///
    /// The counts mirror [`Preset::rule_string`].
    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Life => Self::from_counts(
                [3].into_iter().collect(),
                [2, 3].into_iter().collect(),
            ),
            Preset::Replicator => Self::from_counts(
                [1, 3, 5, 7].into_iter().collect(),
                [1, 3, 5, 7].into_iter().collect(),
            ),
        }
    }

    /// Returns the neighbor counts at which a dead cell is born.
    #[must_use]
    #[inline]
    pub fn birth(&self) -> NeighborCounts {
        self.birth
    }

    /// Returns the neighbor counts at which a live cell survives.
    #[must_use]
    #[inline]
    pub fn survival(&self) -> NeighborCounts {
        self.survival
    }

    /// Returns the next state of the center cell of `neighborhood`.
    #[must_use]
    #[inline]
    pub fn evaluate(&self, neighborhood: Neighborhood) -> bool {
        self.table[usize::from(neighborhood.bits())]
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_preset(Preset::Life)
    }
}

impl From<Preset> for RuleTable {
    fn from(preset: Preset) -> Self {
        Self::from_preset(preset)
    }
}

impl FromStr for RuleTable {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('B')?;
        for count in self.birth.iter() {
            write!(f, "{count}")?;
        }
        f.write_char('S')?;
        for count in self.survival.iter() {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RuleTable").field(&format_args!("{self}")).finish()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::NeighborPosition::{self, *};

    fn with_neighbors(center: bool, count: usize) -> Neighborhood {
        const RING: [NeighborPosition; 8] = [
            TopLeft,
            TopMiddle,
            TopRight,
            MiddleLeft,
            MiddleRight,
            BottomLeft,
            BottomMiddle,
            BottomRight,
        ];
        RING.into_iter()
            .take(count)
            .fold(Neighborhood::EMPTY.with_cell(Center, center), |n, p| {
                n.with_cell(p, true)
            })
    }

    mod parse {
        use super::*;

        #[test]
        fn test_presets_parse() {
            for preset in Preset::ALL {
                let rule = RuleTable::new(preset.rule_string()).unwrap();
                assert_eq!(rule, RuleTable::from_preset(preset));
                assert_eq!(rule.to_string(), preset.rule_string());
            }
        }

        #[test]
        fn test_case_insensitive() {
            assert_eq!(RuleTable::new("b3s23"), Ok(RuleTable::default()));
        }

        #[test]
        fn test_repeated_and_reordered_modes() {
            let rule = RuleTable::new("S3B3S2").unwrap();
            assert_eq!(rule, RuleTable::default());
            assert_eq!(rule.to_string(), "B3S23");
        }

        #[test]
        fn test_empty_sets() {
            let rule = RuleTable::new("BS").unwrap();
            assert_eq!(rule.to_string(), "BS");
            assert!(Neighborhood::all().all(|n| !rule.evaluate(n)));
        }

        #[test]
        fn test_rejects_empty() {
            assert_eq!(RuleTable::new(""), Err(RuleError::Empty));
        }

        #[test]
        fn test_rejects_digit_before_mode() {
            assert_eq!(
                RuleTable::new("3B3S23"),
                Err(RuleError::DigitBeforeMode {
                    position: 0,
                    digit: '3'
                })
            );
        }

        #[test]
        fn test_rejects_invalid_character() {
            assert_eq!(
                RuleTable::new("B23/S23"),
                Err(RuleError::InvalidCharacter {
                    position: 3,
                    found: '/'
                })
            );
            assert_eq!(
                RuleTable::new("B3,S23"),
                Err(RuleError::InvalidCharacter {
                    position: 2,
                    found: ','
                })
            );
        }
    }

    mod evaluate {
        use super::*;

        #[test]
        fn test_life_birth_and_survival() {
            let rule = RuleTable::default();
            assert!(rule.evaluate(with_neighbors(false, 3)));
            assert!(rule.evaluate(with_neighbors(true, 3)));
            assert!(rule.evaluate(with_neighbors(true, 2)));
            assert!(!rule.evaluate(with_neighbors(false, 2)));
            assert!(!rule.evaluate(with_neighbors(true, 1)));
            assert!(!rule.evaluate(with_neighbors(true, 4)));
        }

        #[test]
        fn test_replicator() {
            let rule = RuleTable::from_preset(Preset::Replicator);
            for count in 0..=8 {
                let odd = count % 2 == 1;
                assert_eq!(rule.evaluate(with_neighbors(false, count)), odd);
                assert_eq!(rule.evaluate(with_neighbors(true, count)), odd);
            }
        }

        #[test]
        fn test_digit_nine_never_applies() {
            let with_nine = RuleTable::new("B39S239").unwrap();
            let life = RuleTable::default();
            assert_eq!(with_nine.to_string(), "B39S239");
            assert!(with_nine.birth().contains(9));
            assert!(Neighborhood::all().all(|n| with_nine.evaluate(n) == life.evaluate(n)));
        }
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(Preset::from_name("life"), Some(Preset::Life));
        assert_eq!(Preset::from_name("REPLICATOR"), Some(Preset::Replicator));
        assert_eq!(Preset::from_name("highlife"), None);
        for preset in Preset::ALL {
            assert_eq!(preset.to_string(), preset.name());
        }
    }

    proptest! {
        #[test]
        fn construction_is_idempotent(rule in "[BS]([BSbs0-9]){0,12}") {
            let a = RuleTable::new(&rule).unwrap();
            let b = RuleTable::new(&rule).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert!(Neighborhood::all().all(|n| a.evaluate(n) == b.evaluate(n)));
        }

        #[test]
        fn display_round_trips(rule in "[BS]([BSbs0-9]){0,12}") {
            let parsed = RuleTable::new(&rule).unwrap();
            prop_assert_eq!(RuleTable::new(&parsed.to_string()).unwrap(), parsed);
        }
    }
}
