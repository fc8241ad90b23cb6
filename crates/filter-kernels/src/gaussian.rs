use crate::error::KernelError;
use crate::validate::validate_kernel_params;

/// Create a normalized 2d gaussian kernel.
///
/// The kernel is laid out in row major order with the center cell at offset
/// `(0, 0)`. Each cell holds `exp(-(dx^2 + dy^2) / (2 * sigma^2))` for the
/// offsets `(dx, dy)` from the center, and the result is normalized so the
/// cells sum to one.
///
/// # Arguments
///
/// * `window` - The side length of the kernel in cells. Must be a positive odd integer.
/// * `sigma` - The standard deviation of the gaussian. Must be positive.
///
/// # Returns
///
/// A vector of length `window * window` holding the kernel in row major order.
///
/// # Example
///
/// ```
/// use filter_kernels::gaussian::gaussian_kernel;
///
/// let kernel = gaussian_kernel(3, 1.0).unwrap();
/// assert_eq!(kernel.len(), 9);
///
/// let sum = kernel.iter().sum::<f32>();
/// assert!((sum - 1.0).abs() < 1e-5);
/// ```
pub fn gaussian_kernel(window: i32, sigma: f32) -> Result<Vec<f32>, KernelError> {
    validate_kernel_params(window, sigma)?;

    let aperture = window / 2;
    let two_sigma_sq = 2.0 * sigma * sigma;

    let mut kernel = Vec::with_capacity((window * window) as usize);
    for dy in -aperture..=aperture {
        for dx in -aperture..=aperture {
            let r = (dx * dx + dy * dy) as f32;
            kernel.push((-r / two_sigma_sq).exp());
        }
    }

    // normalize the kernel to unit sum
    let total = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= total);

    Ok(kernel)
}
