use thiserror::Error;

#[derive(Error, Debug)]
pub enum WargameError {
    #[error("{field} must be {min}-{max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Soldier must have a name")]
    MissingName,

    #[error("Battalion must have at least 1 soldier (got {0})")]
    InvalidCount(usize),

    #[error("Must provide at least one prototype key")]
    EmptyPrototypeKeys,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No prototype found for key: {0}")]
    PrototypeNotFound(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WargameError {
    /// Input violated a stated constraint; fix the input and retry.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WargameError::OutOfRange { .. }
                | WargameError::MissingName
                | WargameError::InvalidCount(_)
                | WargameError::EmptyPrototypeKeys
                | WargameError::InvalidInput(_)
        )
    }

    /// A referenced prototype key was not registered at lookup time.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WargameError::PrototypeNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, WargameError>;
