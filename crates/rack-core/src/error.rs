use thiserror::Error;

/// Errors raised while validating a [`RoomConfig`](crate::RoomConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("temperature range is empty: min {min} must be below max {max}")]
    EmptyTemperatureRange { min: i32, max: i32 },
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("a tower needs at least one rack")]
    NoRacks,
    #[error("the room needs at least one tower")]
    NoTowers,
}
