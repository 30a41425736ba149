use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxOrbitError {
    #[error("Invalid monitor parameter: {0}")]
    InvalidMonitorParameter(String),

    #[error("Duplicate trajectory name: {0}")]
    DuplicateTrajectoryName(String),

    #[error("Unknown trajectory source mode: {0} (expected `synthetic` or `tle`)")]
    UnknownSourceMode(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to parse the configuration file: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PartialEq for ProxOrbitError {
    fn eq(&self, other: &Self) -> bool {
        use ProxOrbitError::*;
        match (self, other) {
            (InvalidMonitorParameter(a), InvalidMonitorParameter(b)) => a == b,
            (DuplicateTrajectoryName(a), DuplicateTrajectoryName(b)) => a == b,
            (UnknownSourceMode(a), UnknownSourceMode(b)) => a == b,

            // Wrapped library errors are not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (ConfigParseError(_), ConfigParseError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            _ => false,
        }
    }
}
