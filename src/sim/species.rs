//! Static species table
//!
//! Every entity is an instance of one of six species. The table fixes each
//! species' movement parameters, its place in the food chain and how it moves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when resolving species names
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpeciesError {
    #[error("unknown species: {0}")]
    UnknownSpecies(String),
}

/// Species identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeciesKey {
    Insect,
    Frog,
    Bird,
    Rat,
    Fox,
    Eagle,
}

/// How entities of a species move each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Straight line along a fixed diagonal, bouncing off the walls
    RandomWalk,
    /// Re-aim at the player every tick
    Pursuit,
}

/// Immutable per-species parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Species {
    pub key: SpeciesKey,
    /// Display name drawn above entities
    pub name: &'static str,
    /// Units per tick
    pub speed: f32,
    pub radius: f32,
    /// The species that hunts this one
    pub predator: Option<SpeciesKey>,
    /// Species this one may consume
    pub diet: &'static [SpeciesKey],
    pub behavior: Behavior,
}

impl Species {
    pub fn can_eat(&self, other: SpeciesKey) -> bool {
        self.diet.contains(&other)
    }
}

static TABLE: [Species; 6] = [
    Species {
        key: SpeciesKey::Insect,
        name: "Insect",
        speed: 2.0,
        radius: 10.0,
        predator: Some(SpeciesKey::Frog),
        diet: &[],
        behavior: Behavior::RandomWalk,
    },
    Species {
        key: SpeciesKey::Frog,
        name: "Frog",
        speed: 3.0,
        radius: 20.0,
        predator: Some(SpeciesKey::Bird),
        diet: &[SpeciesKey::Insect],
        behavior: Behavior::Pursuit,
    },
    Species {
        key: SpeciesKey::Bird,
        name: "Bird",
        speed: 6.0,
        radius: 30.0,
        predator: Some(SpeciesKey::Fox),
        diet: &[SpeciesKey::Frog],
        behavior: Behavior::RandomWalk,
    },
    Species {
        key: SpeciesKey::Rat,
        name: "Rat",
        speed: 5.0,
        radius: 25.0,
        predator: Some(SpeciesKey::Fox),
        diet: &[],
        behavior: Behavior::RandomWalk,
    },
    Species {
        key: SpeciesKey::Fox,
        name: "Fox",
        speed: 12.0,
        radius: 40.0,
        predator: Some(SpeciesKey::Eagle),
        diet: &[SpeciesKey::Bird, SpeciesKey::Rat],
        behavior: Behavior::Pursuit,
    },
    Species {
        key: SpeciesKey::Eagle,
        name: "Eagle",
        speed: 15.0,
        radius: 50.0,
        predator: None,
        diet: &[SpeciesKey::Fox],
        behavior: Behavior::Pursuit,
    },
];

impl SpeciesKey {
    pub const ALL: [SpeciesKey; 6] = [
        SpeciesKey::Insect,
        SpeciesKey::Frog,
        SpeciesKey::Bird,
        SpeciesKey::Rat,
        SpeciesKey::Fox,
        SpeciesKey::Eagle,
    ];

    /// Look up the static descriptor for this species
    pub fn descriptor(self) -> &'static Species {
        let species = &TABLE[self as usize];
        debug_assert_eq!(species.key, self, "species table out of order");
        species
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpeciesKey::Insect => "insect",
            SpeciesKey::Frog => "frog",
            SpeciesKey::Bird => "bird",
            SpeciesKey::Rat => "rat",
            SpeciesKey::Fox => "fox",
            SpeciesKey::Eagle => "eagle",
        }
    }
}

impl fmt::Display for SpeciesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeciesKey {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpeciesKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SpeciesError::UnknownSpecies(s.to_string()))
    }
}

/// Resolve a species name to its descriptor
pub fn lookup(name: &str) -> Result<&'static Species, SpeciesError> {
    name.parse::<SpeciesKey>().map(SpeciesKey::descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_species() {
        let frog = lookup("frog").unwrap();
        assert_eq!(frog.key, SpeciesKey::Frog);
        assert_eq!(frog.name, "Frog");
        assert_eq!(frog.speed, 3.0);
        assert_eq!(frog.radius, 20.0);
        assert_eq!(frog.behavior, Behavior::Pursuit);
        assert!(frog.can_eat(SpeciesKey::Insect));
    }

    #[test]
    fn test_lookup_unknown_species() {
        assert_eq!(
            lookup("dragon"),
            Err(SpeciesError::UnknownSpecies("dragon".to_string()))
        );
        // Names are case-sensitive keys, not display names
        assert!(lookup("Frog").is_err());
        assert!(lookup("none").is_err());
    }

    #[test]
    fn test_descriptor_matches_key() {
        for key in SpeciesKey::ALL {
            assert_eq!(key.descriptor().key, key);
            assert_eq!(key.to_string().parse::<SpeciesKey>(), Ok(key));
        }
    }

    #[test]
    fn test_diet_is_inverse_of_predator() {
        for hunter in SpeciesKey::ALL {
            for prey in SpeciesKey::ALL {
                let eats = hunter.descriptor().can_eat(prey);
                let hunted_by = prey.descriptor().predator == Some(hunter);
                assert_eq!(eats, hunted_by, "{hunter} / {prey}");
            }
        }
    }

    #[test]
    fn test_food_chain_has_no_cycles() {
        for start in SpeciesKey::ALL {
            let mut current = start;
            let mut steps = 0;
            while let Some(next) = current.descriptor().predator {
                current = next;
                steps += 1;
                assert!(steps <= SpeciesKey::ALL.len(), "cycle from {start}");
            }
            assert_eq!(current, SpeciesKey::Eagle);
        }
    }
}
