use crate::error::KernelError;
use crate::validate::validate_kernel_params;

/// Create the x kernel of the derivative of gaussian pair.
///
/// The cell at offset `(dx, dy)` holds
/// `-dy / sigma^2 * exp(-(dx^2 + dy^2) / (2 * sigma^2))`, so the sign
/// pattern varies down the rows like [`crate::constants::SOBEL_X`]. The
/// mean of the raw cells is subtracted
/// from every cell so the kernel has zero response on constant regions.
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
/// use filter_kernels::derivative::drog_x_kernel;
///
/// let kernel = drog_x_kernel(3, 1.0).unwrap();
/// assert_eq!(kernel.len(), 9);
///
/// let sum = kernel.iter().sum::<f32>();
/// assert!(sum.abs() < 1e-4);
/// ```
pub fn drog_x_kernel(window: i32, sigma: f32) -> Result<Vec<f32>, KernelError> {
    validate_kernel_params(window, sigma)?;

    let aperture = window / 2;
    let sigma_sq = sigma * sigma;
    let two_sigma_sq = 2.0 * sigma_sq;

    let mut kernel = Vec::with_capacity((window * window) as usize);
    for dy in -aperture..=aperture {
        for dx in -aperture..=aperture {
            let r = (dx * dx + dy * dy) as f32;
            kernel.push(-(dy as f32) / sigma_sq * (-r / two_sigma_sq).exp());
        }
    }

    // subtract the mean so the kernel sums to zero
    let correction = kernel.iter().sum::<f32>() / (window * window) as f32;
    kernel.iter_mut().for_each(|k| *k -= correction);

    Ok(kernel)
}

/// Create the y kernel of the derivative of gaussian pair.
///
/// The cell at offset `(dx, dy)` holds
/// `-dx / sigma^2 * exp(-(dx^2 + dy^2) / (2 * sigma^2))`, so the sign
/// pattern varies across the columns like [`crate::constants::SOBEL_Y`].
/// The mean of the raw cells is subtracted
/// from every cell so the kernel has zero response on constant regions.
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
/// use filter_kernels::derivative::drog_y_kernel;
///
/// let kernel = drog_y_kernel(3, 1.0).unwrap();
/// assert_eq!(kernel.len(), 9);
///
/// let sum = kernel.iter().sum::<f32>();
/// assert!(sum.abs() < 1e-4);
/// ```
pub fn drog_y_kernel(window: i32, sigma: f32) -> Result<Vec<f32>, KernelError> {
    validate_kernel_params(window, sigma)?;

    let aperture = window / 2;
    let sigma_sq = sigma * sigma;
    let two_sigma_sq = 2.0 * sigma_sq;

    let mut kernel = Vec::with_capacity((window * window) as usize);
    for dy in -aperture..=aperture {
        for dx in -aperture..=aperture {
            let r = (dx * dx + dy * dy) as f32;
            kernel.push(-(dx as f32) / sigma_sq * (-r / two_sigma_sq).exp());
        }
    }

    // subtract the mean so the kernel sums to zero
    let correction = kernel.iter().sum::<f32>() / (window * window) as f32;
    kernel.iter_mut().for_each(|k| *k -= correction);

    Ok(kernel)
}
