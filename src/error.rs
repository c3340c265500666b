//! Error types and handling for the `TravelPack` planner

use thiserror::Error;

/// Main error type for the `TravelPack` library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TravelPackError {
    /// No usable weather samples remained after filtering
    #[error("Insufficient weather data: {message}")]
    InsufficientData { message: String },

    /// End date before start date, or a trip shorter than one day
    #[error("Invalid trip window: {message}")]
    InvalidTripWindow { message: String },

    /// Unrecognised temperature tolerance value
    #[error("Invalid temperature tolerance: '{value}'")]
    InvalidTolerance { value: String },

    /// Requested dates fall outside the forecast provider's window
    #[error("Dates outside forecast window: {message}")]
    ForecastWindow { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl TravelPackError {
    /// Create a new insufficient data error
    pub fn insufficient_data<S: Into<String>>(message: S) -> Self {
        Self::InsufficientData {
            message: message.into(),
        }
    }

    /// Create a new invalid trip window error
    pub fn invalid_trip_window<S: Into<String>>(message: S) -> Self {
        Self::InvalidTripWindow {
            message: message.into(),
        }
    }

    /// Create a new invalid tolerance error
    pub fn invalid_tolerance<S: Into<String>>(value: S) -> Self {
        Self::InvalidTolerance {
            value: value.into(),
        }
    }

    /// Create a new forecast window error
    pub fn forecast_window<S: Into<String>>(message: S) -> Self {
        Self::ForecastWindow {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TravelPackError::InsufficientData { .. } => "insufficient_data",
            TravelPackError::InvalidTripWindow { .. } => "invalid_trip_window",
            TravelPackError::InvalidTolerance { .. } => "invalid_tolerance",
            TravelPackError::ForecastWindow { .. } => "forecast_window",
            TravelPackError::Validation { .. } => "validation",
            TravelPackError::Config { .. } => "config",
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelPackError::InsufficientData { .. } => {
                "No temperature data available for the selected dates. Please try dates within the forecast range."
                    .to_string()
            }
            TravelPackError::InvalidTripWindow { message } => message.clone(),
            TravelPackError::InvalidTolerance { value } => format!(
                "Unknown temperature tolerance '{value}'. Use cold-sensitive, neutral or heat-sensitive."
            ),
            TravelPackError::ForecastWindow { message } => message.clone(),
            TravelPackError::Validation { message } => message.clone(),
            TravelPackError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = TravelPackError::insufficient_data("no readings");
        assert!(matches!(err, TravelPackError::InsufficientData { .. }));

        let err = TravelPackError::invalid_trip_window("end before start");
        assert!(matches!(err, TravelPackError::InvalidTripWindow { .. }));

        let err = TravelPackError::invalid_tolerance("lukewarm");
        assert!(matches!(err, TravelPackError::InvalidTolerance { .. }));
    }

    #[test]
    fn test_user_messages() {
        let err = TravelPackError::validation("Destination is required");
        assert_eq!(err.user_message(), "Destination is required");

        let err = TravelPackError::invalid_tolerance("lukewarm");
        assert!(err.user_message().contains("lukewarm"));

        let err = TravelPackError::config("bad port");
        assert!(err.user_message().contains("Configuration error"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            TravelPackError::insufficient_data(""),
            TravelPackError::invalid_trip_window(""),
            TravelPackError::invalid_tolerance(""),
            TravelPackError::forecast_window(""),
            TravelPackError::validation(""),
            TravelPackError::config(""),
        ];
        let mut codes: Vec<&str> = errors.iter().map(TravelPackError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
