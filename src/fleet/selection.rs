// ABOUTME: Operator fleet selection parsed from the --fleet argument.
// ABOUTME: "0" or empty means every fleet; otherwise a comma-separated list of fleet numbers.

use nonempty::NonEmpty;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fleet selection '{input}': {reason}")]
pub struct InvalidSelection {
    pub input: String,
    pub reason: String,
}

impl InvalidSelection {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Which fleets a command addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetSelection {
    /// Every whole fleet implied by the port range.
    All,
    /// Explicit fleet numbers, each at least 1, in operator order.
    Fleets(NonEmpty<u32>),
}

impl FleetSelection {
    pub fn fleets(numbers: &[u32]) -> Result<Self, InvalidSelection> {
        let rendered = numbers
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        if numbers.contains(&0) {
            return Err(InvalidSelection::new(rendered, "fleet numbers start at 1"));
        }
        NonEmpty::from_slice(numbers)
            .map(FleetSelection::Fleets)
            .ok_or_else(|| InvalidSelection::new(rendered, "no fleet numbers given"))
    }
}

impl FromStr for FleetSelection {
    type Err = InvalidSelection;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == "0" {
            return Ok(FleetSelection::All);
        }

        let mut numbers = Vec::new();
        for part in trimmed.split(',') {
            let part = part.trim();
            let number: i64 = part
                .parse()
                .map_err(|_| InvalidSelection::new(input, format!("'{part}' is not a number")))?;
            if number < 1 {
                return Err(InvalidSelection::new(
                    input,
                    format!("fleet number {number} is not positive"),
                ));
            }
            let number = u32::try_from(number)
                .map_err(|_| InvalidSelection::new(input, format!("fleet number {number} is too large")))?;
            numbers.push(number);
        }

        Self::fleets(&numbers).map_err(|e| InvalidSelection::new(input, e.reason))
    }
}

impl fmt::Display for FleetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetSelection::All => write!(f, "all fleets"),
            FleetSelection::Fleets(numbers) => {
                let list = numbers.iter().map(u32::to_string).collect::<Vec<_>>();
                write!(f, "fleets {}", list.join(","))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_empty_mean_all() {
        assert_eq!("0".parse::<FleetSelection>().unwrap(), FleetSelection::All);
        assert_eq!("".parse::<FleetSelection>().unwrap(), FleetSelection::All);
        assert_eq!("  ".parse::<FleetSelection>().unwrap(), FleetSelection::All);
    }

    #[test]
    fn parses_list_with_spaces() {
        let selection: FleetSelection = "1, 3 ,2".parse().unwrap();
        assert_eq!(selection, FleetSelection::fleets(&[1, 3, 2]).unwrap());
    }

    #[test]
    fn rejects_non_numeric() {
        let err = "1,x".parse::<FleetSelection>().unwrap_err();
        assert_eq!(err.input, "1,x");
        assert!(err.reason.contains("'x'"));
    }

    #[test]
    fn rejects_non_positive() {
        assert!("1,0".parse::<FleetSelection>().is_err());
        assert!("-2".parse::<FleetSelection>().is_err());
        assert!("1,,2".parse::<FleetSelection>().is_err());
    }

    #[test]
    fn display_lists_fleets() {
        let selection = FleetSelection::fleets(&[2, 1]).unwrap();
        assert_eq!(selection.to_string(), "fleets 2,1");
        assert_eq!(FleetSelection::All.to_string(), "all fleets");
    }
}
