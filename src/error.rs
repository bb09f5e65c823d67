use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VectorError {
    /// A vector has no reciprocal, so it cannot be used as a divisor.
    #[error("cannot divide by a vector, only by a scalar")]
    VectorDivisor,
    #[error("division by zero")]
    DivideByZero,
    #[error("divisor is not a finite number: {0}")]
    NonFiniteDivisor(f64),
}
