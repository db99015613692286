//! The four bounded attributes carried by every monster card.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::StatError;
use crate::utils::sanitize::is_integer_literal;

/// One of the four attributes, in the order they are always prompted and shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Strength,
    Speed,
    Stealth,
    Cunning,
}

impl Stat {
    pub const ALL: [Stat; 4] = [Stat::Strength, Stat::Speed, Stat::Stealth, Stat::Cunning];

    /// Lower-case label used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Strength => "strength",
            Stat::Speed => "speed",
            Stat::Stealth => "stealth",
            Stat::Cunning => "cunning",
        }
    }
}

impl Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A stat value, always within `[StatValue::MIN, StatValue::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct StatValue(u8);

impl StatValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 25;

    pub fn new(value: i64) -> Result<Self, StatError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(StatValue(value as u8))
        } else {
            Err(StatError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Checked at compile time when used in a `const`.
    pub(crate) const fn from_const(value: u8) -> Self {
        assert!(value >= Self::MIN && value <= Self::MAX);
        StatValue(value)
    }

    /// Parses a trimmed answer such as `"17"`.
    ///
    /// Integers too large for `i64` are out of range, not "not a number".
    pub fn parse(input: &str) -> Result<Self, StatError> {
        let input = input.trim();
        match input.parse::<i64>() {
            Ok(value) => Self::new(value),
            Err(_) if is_integer_literal(input) => Err(StatError::OutOfRange {
                value: if input.starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                },
                min: Self::MIN,
                max: Self::MAX,
            }),
            Err(_) => Err(StatError::NotNumber(input.to_string())),
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Pass through so width and alignment flags apply.
        Display::fmt(&self.0, f)
    }
}

/// Keep-or-replace parsing for the edit pass: a blank answer keeps `current`.
pub fn parse_stat_edit(input: &str, current: StatValue) -> Result<StatValue, StatError> {
    let input = input.trim();
    if input.is_empty() {
        Ok(current)
    } else {
        StatValue::parse(input)
    }
}

/// The full record stored under a monster's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    pub strength: StatValue,
    pub speed: StatValue,
    pub stealth: StatValue,
    pub cunning: StatValue,
}

impl Stats {
    /// Builds a record from raw numbers, rejecting any value out of range.
    pub fn new(strength: i64, speed: i64, stealth: i64, cunning: i64) -> Result<Self, StatError> {
        Ok(Stats {
            strength: StatValue::new(strength)?,
            speed: StatValue::new(speed)?,
            stealth: StatValue::new(stealth)?,
            cunning: StatValue::new(cunning)?,
        })
    }

    pub(crate) const fn from_const(strength: u8, speed: u8, stealth: u8, cunning: u8) -> Self {
        Stats {
            strength: StatValue::from_const(strength),
            speed: StatValue::from_const(speed),
            stealth: StatValue::from_const(stealth),
            cunning: StatValue::from_const(cunning),
        }
    }

    pub fn get(&self, stat: Stat) -> StatValue {
        match stat {
            Stat::Strength => self.strength,
            Stat::Speed => self.speed,
            Stat::Stealth => self.stealth,
            Stat::Cunning => self.cunning,
        }
    }

    pub fn set(&mut self, stat: Stat, value: StatValue) {
        match stat {
            Stat::Strength => self.strength = value,
            Stat::Speed => self.speed = value,
            Stat::Stealth => self.stealth = value,
            Stat::Cunning => self.cunning = value,
        }
    }
}
