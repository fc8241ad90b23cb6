use crate::error::KernelError;

/// Validate the window size and sigma shared by all kernel generators.
///
/// The window must be a positive odd integer and sigma must be positive.
/// The checks run in a fixed order, so an even negative window reports
/// [`KernelError::EvenWindow`] rather than [`KernelError::NonPositiveWindow`].
///
/// # Arguments
///
/// * `window` - The side length of the kernel in cells.
/// * `sigma` - The standard deviation of the gaussian.
///
/// # Errors
///
/// Returns [`KernelError::EvenWindow`] if `window` is even,
/// [`KernelError::NonPositiveWindow`] if `window` is not positive, and
/// [`KernelError::NonPositiveSigma`] if `sigma` is not positive.
///
/// # Example
///
/// ```
/// use filter_kernels::validate::validate_kernel_params;
///
/// validate_kernel_params(5, 1.2).unwrap();
/// assert!(validate_kernel_params(4, 1.2).is_err());
/// ```
pub fn validate_kernel_params(window: i32, sigma: f32) -> Result<(), KernelError> {
    if window % 2 == 0 {
        return Err(KernelError::EvenWindow(window));
    }

    if window <= 0 {
        return Err(KernelError::NonPositiveWindow(window));
    }

    if sigma <= 0.0 {
        return Err(KernelError::NonPositiveSigma(sigma));
    }

    Ok(())
}
