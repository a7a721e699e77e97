//! A demo run: who gets named, which ships get compared, which animals speak.
//!
//! Scenarios can be loaded from TOML:
//!
//! ```toml
//! [[people]]
//! full_name = "Rich"
//!
//! [[starships]]
//! prefix = "USS"
//! name = "Enterprise"
//! rename = "Lambda"
//!
//! [[starships]]
//! name = "Firefly"
//! listed = false
//!
//! [[comparisons]]
//! left = 1
//! right = 0
//!
//! [[animals]]
//! species = "cat"
//! legs = 4
//! ```

use crate::animal::{chorus, total_legs, Animal, Species};
use crate::error::{ProtocolsError, Result};
use crate::named::{write_full_names, FullyNamed, Person, StarShip};
use crate::random::{GeneratesRandomNumbers, OneThroughTen};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonSpec {
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StarShipSpec {
    #[serde(default)]
    pub prefix: Option<String>,
    pub name: String,
    /// Applied to the live ship after it is constructed.
    #[serde(default)]
    pub rename: Option<String>,
    /// Whether the ship joins the `FullyNamed` roster that gets printed.
    #[serde(default = "listed_by_default")]
    pub listed: bool,
}

fn listed_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Comparison {
    pub left: usize,
    pub right: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimalSpec {
    pub species: String,
    pub legs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub people: Vec<PersonSpec>,
    #[serde(default)]
    pub starships: Vec<StarShipSpec>,
    #[serde(default)]
    pub comparisons: Vec<Comparison>,
    #[serde(default)]
    pub animals: Vec<AnimalSpec>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            people: vec![PersonSpec {
                full_name: "Rich".to_string(),
            }],
            starships: vec![
                StarShipSpec {
                    prefix: Some("USS".to_string()),
                    name: "Enterprise".to_string(),
                    rename: Some("Lambda".to_string()),
                    listed: true,
                },
                StarShipSpec {
                    prefix: None,
                    name: "Firefly".to_string(),
                    rename: None,
                    listed: false,
                },
            ],
            // serenity == enterprise
            comparisons: vec![Comparison { left: 1, right: 0 }],
            animals: vec![AnimalSpec {
                species: "cat".to_string(),
                legs: 4,
            }],
        }
    }
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded scenario file");
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        for animal in &self.animals {
            animal.species.parse::<Species>()?;
        }

        let len = self.starships.len();
        for comparison in &self.comparisons {
            for index in [comparison.left, comparison.right] {
                if index >= len {
                    return Err(ProtocolsError::ComparisonOutOfRange { index, len });
                }
            }
        }
        Ok(())
    }

    /// Builds the ships and then applies any renames to the live values.
    pub fn starships(&self) -> Vec<StarShip> {
        self.starships
            .iter()
            .map(|spec| {
                let mut ship = StarShip::new(spec.prefix.as_deref(), spec.name.as_str());
                if let Some(new_name) = &spec.rename {
                    debug!(from = %ship.name, to = %new_name, "renaming starship");
                    ship.rename(new_name.as_str());
                }
                ship
            })
            .collect()
    }

    pub fn animals(&self) -> Result<Vec<Box<dyn Animal>>> {
        self.animals
            .iter()
            .map(|spec| Ok(spec.species.parse::<Species>()?.with_legs(spec.legs)))
            .collect()
    }
}

/// Runs a scenario, writing every line it prints to `out`.
pub fn run<W: Write>(scenario: &Scenario, out: &mut W) -> Result<()> {
    scenario.validate()?;

    let ships = scenario.starships();

    let mut fully_named_things: Vec<Box<dyn FullyNamed>> = Vec::new();
    for person in &scenario.people {
        fully_named_things.push(Box::new(Person::new(person.full_name.as_str())));
    }
    for (ship, spec) in ships.iter().zip(&scenario.starships) {
        if spec.listed {
            fully_named_things.push(Box::new(ship.clone()));
        }
    }
    write_full_names(out, &fully_named_things)?;

    for comparison in &scenario.comparisons {
        let left = &ships[comparison.left];
        let right = &ships[comparison.right];
        let same = left == right;
        debug!(left = %left, right = %right, same, "compared starships");
        if same {
            writeln!(out, "They are the same")?;
        }
    }

    let roll = OneThroughTen.random();
    debug!(roll, "generated random number");

    let animals = scenario.animals()?;
    chorus(&animals, out)?;
    info!(
        animals = animals.len(),
        legs = total_legs(&animals),
        "scenario finished"
    );

    Ok(())
}
