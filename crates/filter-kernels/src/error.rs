use thiserror::Error;

/// An error type for kernel parameter validation.
#[derive(Error, Debug, PartialEq)]
pub enum KernelError {
    /// The kernel window is an even number of cells.
    #[error("Kernel window must be odd, got {0}")]
    EvenWindow(i32),

    /// The kernel window is zero or negative.
    #[error("Kernel window must be positive, got {0}")]
    NonPositiveWindow(i32),

    /// The gaussian sigma is zero or negative.
    #[error("Kernel sigma must be positive, got {0}")]
    NonPositiveSigma(f32),
}
