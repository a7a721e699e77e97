//! Property requirements: anything `FullyNamed` must expose a full name.

use std::fmt;
use std::io::{self, Write};

/// Conforming types promise a readable `full_name`.
pub trait FullyNamed {
    fn full_name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Person {
    pub full_name: String,
}

impl Person {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

impl FullyNamed for Person {
    fn full_name(&self) -> String {
        self.full_name.clone()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// A starship may carry a registry prefix ("USS"), but not all do.
///
/// The full name is computed on every access, so renaming a live ship is
/// visible immediately.
#[derive(Debug, Clone)]
pub struct StarShip {
    pub prefix: Option<String>,
    pub name: String,
}

impl StarShip {
    pub fn new(prefix: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            name: name.into(),
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl FullyNamed for StarShip {
    fn full_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{} {}", prefix, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for StarShip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

// Ships are equal when their full names match, however prefix and name split it.
impl PartialEq for StarShip {
    fn eq(&self, other: &Self) -> bool {
        self.full_name() == other.full_name()
    }
}

impl Eq for StarShip {}

/// Writes one full name per line, in sequence order.
pub fn write_full_names<W: Write>(
    out: &mut W,
    things: &[Box<dyn FullyNamed>],
) -> io::Result<()> {
    for thing in things {
        writeln!(out, "{}", thing.full_name())?;
    }
    Ok(())
}

pub fn print_full_names(things: &[Box<dyn FullyNamed>]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_full_names(&mut out, things)
}
