use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::FormulaError;

/// Standard die sizes, ordered smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieSize {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DieSize {
    /// All die sizes in ascending order
    pub fn all() -> &'static [DieSize] {
        &[
            DieSize::D4,
            DieSize::D6,
            DieSize::D8,
            DieSize::D10,
            DieSize::D12,
            DieSize::D20,
        ]
    }

    /// Number of faces
    pub fn sides(&self) -> u32 {
        match self {
            DieSize::D4 => 4,
            DieSize::D6 => 6,
            DieSize::D8 => 8,
            DieSize::D10 => 10,
            DieSize::D12 => 12,
            DieSize::D20 => 20,
        }
    }

    /// Look up a die size by face count
    pub fn from_sides(sides: u32) -> Option<DieSize> {
        DieSize::all().iter().copied().find(|d| d.sides() == sides)
    }

    /// The next smaller size, or None at d4
    pub fn step_down(&self) -> Option<DieSize> {
        match self {
            DieSize::D4 => None,
            DieSize::D6 => Some(DieSize::D4),
            DieSize::D8 => Some(DieSize::D6),
            DieSize::D10 => Some(DieSize::D8),
            DieSize::D12 => Some(DieSize::D10),
            DieSize::D20 => Some(DieSize::D12),
        }
    }

    /// The next larger size, or None at d20
    pub fn step_up(&self) -> Option<DieSize> {
        match self {
            DieSize::D4 => Some(DieSize::D6),
            DieSize::D6 => Some(DieSize::D8),
            DieSize::D8 => Some(DieSize::D10),
            DieSize::D10 => Some(DieSize::D12),
            DieSize::D12 => Some(DieSize::D20),
            DieSize::D20 => None,
        }
    }
}

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

impl FromStr for DieSize {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix('d')
            .or_else(|| s.strip_prefix('D'))
            .unwrap_or(s);
        let sides: u32 = digits
            .parse()
            .map_err(|_| FormulaError::InvalidDieSize(s.to_string()))?;
        DieSize::from_sides(sides).ok_or(FormulaError::UnsupportedDie(sides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(DieSize::D4 < DieSize::D6);
        assert!(DieSize::D12 < DieSize::D20);
        let mut sorted = vec![DieSize::D20, DieSize::D4, DieSize::D10];
        sorted.sort();
        assert_eq!(sorted, vec![DieSize::D4, DieSize::D10, DieSize::D20]);
    }

    #[test]
    fn test_step_down_chain() {
        let mut die = DieSize::D20;
        let mut steps = 0;
        while let Some(next) = die.step_down() {
            die = next;
            steps += 1;
        }
        assert_eq!(die, DieSize::D4);
        assert_eq!(steps, 5);
    }

    #[test]
    fn test_step_up_floor_and_ceiling() {
        assert_eq!(DieSize::D4.step_down(), None);
        assert_eq!(DieSize::D20.step_up(), None);
        assert_eq!(DieSize::D10.step_up(), Some(DieSize::D12));
    }

    #[test]
    fn test_from_sides() {
        assert_eq!(DieSize::from_sides(8), Some(DieSize::D8));
        assert_eq!(DieSize::from_sides(7), None);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("d12".parse::<DieSize>().unwrap(), DieSize::D12);
        assert_eq!("D6".parse::<DieSize>().unwrap(), DieSize::D6);
        assert_eq!(DieSize::D20.to_string(), "d20");
        assert!(matches!(
            "d7".parse::<DieSize>(),
            Err(FormulaError::UnsupportedDie(7))
        ));
    }
}
