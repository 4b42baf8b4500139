use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Returned by the Schmidt-number family when the median of the
    /// temperature input exceeds 270, i.e. the caller most likely passed
    /// Kelvin where degrees Celsius are expected.
    #[error("temperature is not in degC")]
    TemperatureNotCelsius,

    #[error("inputs have mismatched lengths: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
