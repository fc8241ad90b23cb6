use crate::error::KernelError;
use crate::gaussian::gaussian_kernel;

/// Create a laplacian of gaussian kernel.
///
/// The cell at offset `(dx, dy)` holds
/// `g(dx, dy) * (dx^2 + dy^2 - 2 * sigma^2) / sigma^4` where `g` is the
/// normalized gaussian of the same window and sigma. The mean of the raw
/// cells is then subtracted from every cell so the kernel has zero response
/// on constant regions.
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
/// use filter_kernels::laplacian::log_kernel;
///
/// let kernel = log_kernel(5, 1.0).unwrap();
/// assert_eq!(kernel.len(), 25);
///
/// let sum = kernel.iter().sum::<f32>();
/// assert!(sum.abs() < 1e-4);
/// ```
pub fn log_kernel(window: i32, sigma: f32) -> Result<Vec<f32>, KernelError> {
    let gauss = gaussian_kernel(window, sigma)?;

    let aperture = window / 2;
    let sigma_sq = sigma * sigma;
    let sigma_4 = sigma_sq * sigma_sq;

    let mut kernel = Vec::with_capacity(gauss.len());
    for (dy, row) in (-aperture..=aperture).zip(gauss.chunks_exact(window as usize)) {
        for (dx, &g) in (-aperture..=aperture).zip(row.iter()) {
            let r = (dx * dx + dy * dy) as f32;
            kernel.push(g * (r - 2.0 * sigma_sq) / sigma_4);
        }
    }

    // subtract the mean so the kernel sums to zero
    let correction = kernel.iter().sum::<f32>() / (window * window) as f32;
    kernel.iter_mut().for_each(|k| *k -= correction);

    Ok(kernel)
}
