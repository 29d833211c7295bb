#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("no VTIMEZONE definition bundled for {0}")]
    MissingDefinition(String),
}
