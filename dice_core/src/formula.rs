use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{DieSize, FormulaError};

/// Which dice of a multi-die draw count toward the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keep {
    /// Sum every die
    #[default]
    All,
    /// Keep only the single lowest die
    Lowest,
    /// Keep only the single highest die
    Highest,
}

/// A parsed dice expression like "1d6+2" or "2d20kl"
///
/// Grammar: `[count] 'd' sides ['kl' | 'kh'] [('+'|'-') modifier]`.
/// Count defaults to 1; sides must be one of the standard sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceFormula {
    pub count: u32,
    pub die: DieSize,
    pub keep: Keep,
    pub modifier: i32,
}

impl DiceFormula {
    pub fn new(count: u32, die: DieSize) -> Self {
        DiceFormula {
            count,
            die,
            keep: Keep::All,
            modifier: 0,
        }
    }

    /// A single unmodified die
    pub fn single(die: DieSize) -> Self {
        Self::new(1, die)
    }

    pub fn with_keep(mut self, keep: Keep) -> Self {
        self.keep = keep;
        self
    }

    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Parse an expression such as "1d6", "d8", "2d20kl" or "2d6+1"
    pub fn parse(input: &str) -> Result<Self, FormulaError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(FormulaError::Empty);
        }

        let d_pos = input
            .find('d')
            .ok_or_else(|| FormulaError::MissingSeparator(input.clone()))?;

        let count_str = &input[..d_pos];
        let count: u32 = if count_str.is_empty() {
            1
        } else {
            count_str
                .parse()
                .map_err(|_| FormulaError::InvalidCount(count_str.to_string()))?
        };
        if count == 0 {
            return Err(FormulaError::ZeroCount);
        }

        let rest = &input[d_pos + 1..];
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let sides_str = &rest[..digits_end];
        let sides: u32 = sides_str
            .parse()
            .map_err(|_| FormulaError::InvalidDieSize(rest.to_string()))?;
        let die = DieSize::from_sides(sides).ok_or(FormulaError::UnsupportedDie(sides))?;

        let mut tail = &rest[digits_end..];
        let keep = if let Some(after) = tail.strip_prefix("kl") {
            tail = after;
            Keep::Lowest
        } else if let Some(after) = tail.strip_prefix("kh") {
            tail = after;
            Keep::Highest
        } else {
            Keep::All
        };

        let modifier: i32 = if tail.is_empty() {
            0
        } else if tail.starts_with('+') || tail.starts_with('-') {
            tail.parse()
                .map_err(|_| FormulaError::InvalidModifier(tail.to_string()))?
        } else {
            return Err(FormulaError::InvalidModifier(tail.to_string()));
        };

        Ok(DiceFormula {
            count,
            die,
            keep,
            modifier,
        })
    }

    /// Smallest possible total
    pub fn min_total(&self) -> i32 {
        let kept = match self.keep {
            Keep::All => self.count,
            Keep::Lowest | Keep::Highest => 1,
        };
        kept as i32 + self.modifier
    }

    /// Largest possible total
    pub fn max_total(&self) -> i32 {
        let kept = match self.keep {
            Keep::All => self.count,
            Keep::Lowest | Keep::Highest => 1,
        };
        (kept * self.die.sides()) as i32 + self.modifier
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.keep {
            Keep::All => {}
            Keep::Lowest => write!(f, "kl")?,
            Keep::Highest => write!(f, "kh")?,
        }
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)?;
        }
        Ok(())
    }
}

impl FromStr for DiceFormula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let f = DiceFormula::parse("1d6").unwrap();
        assert_eq!(f.count, 1);
        assert_eq!(f.die, DieSize::D6);
        assert_eq!(f.keep, Keep::All);
        assert_eq!(f.modifier, 0);
    }

    #[test]
    fn test_parse_shorthand() {
        let f = DiceFormula::parse("d20").unwrap();
        assert_eq!(f.count, 1);
        assert_eq!(f.die, DieSize::D20);
    }

    #[test]
    fn test_parse_keep_lowest() {
        let f = DiceFormula::parse("2d20kl").unwrap();
        assert_eq!(f.count, 2);
        assert_eq!(f.die, DieSize::D20);
        assert_eq!(f.keep, Keep::Lowest);
    }

    #[test]
    fn test_parse_keep_highest_with_modifier() {
        let f = DiceFormula::parse("2d20kh+1").unwrap();
        assert_eq!(f.keep, Keep::Highest);
        assert_eq!(f.modifier, 1);
    }

    #[test]
    fn test_parse_negative_modifier() {
        let f = DiceFormula::parse("2d6-1").unwrap();
        assert_eq!(f.count, 2);
        assert_eq!(f.modifier, -1);
    }

    #[test]
    fn test_parse_case_and_whitespace() {
        let f = DiceFormula::parse(" 2D20KL ").unwrap();
        assert_eq!(f.keep, Keep::Lowest);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(DiceFormula::parse(""), Err(FormulaError::Empty)));
        assert!(matches!(
            DiceFormula::parse("20"),
            Err(FormulaError::MissingSeparator(_))
        ));
        assert!(matches!(
            DiceFormula::parse("0d6"),
            Err(FormulaError::ZeroCount)
        ));
        assert!(matches!(
            DiceFormula::parse("1d7"),
            Err(FormulaError::UnsupportedDie(7))
        ));
        assert!(matches!(
            DiceFormula::parse("1d6x2"),
            Err(FormulaError::InvalidModifier(_))
        ));
        assert!(matches!(
            DiceFormula::parse("1d6+"),
            Err(FormulaError::InvalidModifier(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for expr in ["1d6", "2d20kl", "2d20kh", "3d8+2", "1d4-1"] {
            let f = DiceFormula::parse(expr).unwrap();
            assert_eq!(f.to_string(), expr);
            assert_eq!(DiceFormula::parse(&f.to_string()).unwrap(), f);
        }
    }

    #[test]
    fn test_total_bounds() {
        let f = DiceFormula::parse("2d6+1").unwrap();
        assert_eq!(f.min_total(), 3);
        assert_eq!(f.max_total(), 13);

        let f = DiceFormula::parse("2d20kl").unwrap();
        assert_eq!(f.min_total(), 1);
        assert_eq!(f.max_total(), 20);
    }
}
