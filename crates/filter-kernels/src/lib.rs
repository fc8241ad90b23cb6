#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// fixed 3x3 edge detection kernels.
pub mod constants;

/// derivative-of-gaussian kernels for gradient estimation.
pub mod derivative;

/// Error types for the kernel generators.
pub mod error;

/// isotropic gaussian smoothing kernels.
pub mod gaussian;

/// laplacian-of-gaussian kernels for edge and blob detection.
pub mod laplacian;

/// kernel parameter validation.
pub mod validate;

pub use crate::error::KernelError;
