use crate::state::Temperature;

#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum ThresholdError {
    #[error("invalid threshold: lower {lower} must not exceed upper {upper}")]
    InvalidThreshold {
        lower: Temperature,
        upper: Temperature,
    },
}
