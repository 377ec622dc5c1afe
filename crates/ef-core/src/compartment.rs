use core::fmt;
use core::str::FromStr;

use crate::EfError;

/// The four SEIRS compartments, in state order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compartment {
    Susceptible,
    Exposed,
    Infectious,
    Recovered,
}

impl Compartment {
    pub const ALL: [Compartment; 4] = [
        Compartment::Susceptible,
        Compartment::Exposed,
        Compartment::Infectious,
        Compartment::Recovered,
    ];

    /// Position of the compartment in a (s, e, i, r) tuple.
    pub fn index(self) -> usize {
        match self {
            Compartment::Susceptible => 0,
            Compartment::Exposed => 1,
            Compartment::Infectious => 2,
            Compartment::Recovered => 3,
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compartment::Susceptible => "susceptible",
            Compartment::Exposed => "exposed",
            Compartment::Infectious => "infectious",
            Compartment::Recovered => "recovered",
        };
        f.write_str(name)
    }
}

impl FromStr for Compartment {
    type Err = EfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "susceptible" => Ok(Compartment::Susceptible),
            "e" | "exposed" => Ok(Compartment::Exposed),
            "i" | "infectious" => Ok(Compartment::Infectious),
            "r" | "recovered" => Ok(Compartment::Recovered),
            _ => Err(EfError::UnknownCompartment {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_state_order() {
        for (ix, c) in Compartment::ALL.iter().enumerate() {
            assert_eq!(c.index(), ix);
        }
    }

    #[test]
    fn parse_short_and_long_names() {
        assert_eq!("i".parse::<Compartment>().unwrap(), Compartment::Infectious);
        assert_eq!(
            "Recovered".parse::<Compartment>().unwrap(),
            Compartment::Recovered
        );
        let err = "x".parse::<Compartment>().unwrap_err();
        assert!(format!("{err}").contains("Unknown compartment"));
    }
}
