//! Protocols as types: anything that is an `Animal` has legs and can speak.

use crate::error::ProtocolsError;
use std::io::{self, Write};
use std::str::FromStr;

pub trait Animal {
    fn number_of_legs(&self) -> u32;

    /// The one line this animal says.
    fn sound(&self) -> &'static str;

    fn speak_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.sound())
    }

    /// Says the sound on stdout, failing the way `println!` does.
    fn speak(&self) {
        if let Err(err) = self.speak_to(&mut io::stdout().lock()) {
            panic!("failed printing to stdout: {}", err);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cat {
    pub number_of_legs: u32,
}

impl Animal for Cat {
    fn number_of_legs(&self) -> u32 {
        self.number_of_legs
    }

    fn sound(&self) -> &'static str {
        "Meow"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dog {
    pub number_of_legs: u32,
}

impl Animal for Dog {
    fn number_of_legs(&self) -> u32 {
        self.number_of_legs
    }

    fn sound(&self) -> &'static str {
        "Woof"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    pub fn with_legs(self, number_of_legs: u32) -> Box<dyn Animal> {
        match self {
            Species::Cat => Box::new(Cat { number_of_legs }),
            Species::Dog => Box::new(Dog { number_of_legs }),
        }
    }
}

impl FromStr for Species {
    type Err = ProtocolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cat" => Ok(Species::Cat),
            "dog" => Ok(Species::Dog),
            _ => Err(ProtocolsError::unknown_species(s)),
        }
    }
}

/// Every animal speaks once, in order.
pub fn chorus<W: Write>(animals: &[Box<dyn Animal>], out: &mut W) -> io::Result<()> {
    for animal in animals {
        animal.speak_to(&mut *out)?;
    }
    Ok(())
}

// Summed as u64 so any mix of u32 leg counts fits.
pub fn total_legs(animals: &[Box<dyn Animal>]) -> u64 {
    animals
        .iter()
        .map(|animal| u64::from(animal.number_of_legs()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every line it is asked to write instead of touching stdout.
    struct Recorder {
        lines: RefCell<Vec<u8>>,
    }

    impl Animal for Recorder {
        fn number_of_legs(&self) -> u32 {
            2
        }

        fn sound(&self) -> &'static str {
            "Meow"
        }

        fn speak_to(&self, _out: &mut dyn Write) -> io::Result<()> {
            writeln!(self.lines.borrow_mut(), "{}", self.sound())
        }
    }

    #[test]
    fn test_cat_speaks_meow_only() {
        let my_cat = Cat { number_of_legs: 4 };
        let mut out = Vec::new();
        my_cat.speak_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Meow\n");
        assert_eq!(my_cat.number_of_legs(), 4);
    }

    #[test]
    fn test_dog_speaks_woof() {
        let dog = Dog { number_of_legs: 4 };
        assert_eq!(dog.sound(), "Woof");

        let mut out = Vec::new();
        dog.speak_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Woof\n");
    }

    #[test]
    fn test_speak_goes_through_speak_to() {
        let recorder = Recorder {
            lines: RefCell::new(Vec::new()),
        };
        recorder.speak();
        recorder.speak();
        assert_eq!(recorder.lines.borrow().as_slice(), b"Meow\nMeow\n");
    }

    #[test]
    fn test_total_legs_does_not_overflow() {
        let animals: Vec<Box<dyn Animal>> = vec![
            Species::Cat.with_legs(u32::MAX),
            Species::Dog.with_legs(1),
        ];
        assert_eq!(total_legs(&animals), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_species_parsing() {
        assert_eq!("cat".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!(" Dog ".parse::<Species>().unwrap(), Species::Dog);

        let err = "parrot".parse::<Species>().unwrap_err();
        assert!(matches!(err, ProtocolsError::UnknownSpecies { species } if species == "parrot"));
    }

    #[test]
    fn test_mixed_animals_chorus() {
        let animals: Vec<Box<dyn Animal>> = vec![
            Species::Dog.with_legs(4),
            Species::Cat.with_legs(3),
            Box::new(Dog { number_of_legs: 0 }),
        ];

        let mut out = Vec::new();
        chorus(&animals, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Woof\nMeow\nWoof\n");
        assert_eq!(total_legs(&animals), 7);
    }

    #[test]
    fn test_empty_chorus() {
        let mut out = Vec::new();
        chorus(&[], &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(total_legs(&[]), 0);
    }
}
