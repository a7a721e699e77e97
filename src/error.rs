use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scenario: {message}")]
    Parse { message: String },

    #[error("Unknown species '{species}' (expected one of: cat, dog)")]
    UnknownSpecies { species: String },

    #[error("Comparison index {index} is out of range for {len} starship(s)")]
    ComparisonOutOfRange { index: usize, len: usize },
}

impl ProtocolsError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn unknown_species(species: impl Into<String>) -> Self {
        Self::UnknownSpecies {
            species: species.into(),
        }
    }
}

impl From<toml::de::Error> for ProtocolsError {
    fn from(err: toml::de::Error) -> Self {
        ProtocolsError::parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProtocolsError>;
