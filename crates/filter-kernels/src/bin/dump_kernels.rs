use filter_kernels::constants::{PREWITT_X, SOBEL_X};
use filter_kernels::derivative::{drog_x_kernel, drog_y_kernel};
use filter_kernels::gaussian::gaussian_kernel;
use filter_kernels::laplacian::log_kernel;

fn print_kernel(name: &str, kernel: &[f32], window: i32) {
    println!("{name} ({window}x{window}):");
    for row in kernel.chunks_exact(window as usize) {
        for value in row {
            print!("{value:9.6} ");
        }
        println!();
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let window = 5;
    let sigma = 1.0;

    print_kernel("gaussian", &gaussian_kernel(window, sigma)?, window);
    print_kernel("laplacian of gaussian", &log_kernel(window, sigma)?, window);
    print_kernel("drog x", &drog_x_kernel(window, sigma)?, window);
    print_kernel("drog y", &drog_y_kernel(window, sigma)?, window);
    print_kernel("sobel x", &SOBEL_X, 3);
    print_kernel("prewitt x", &PREWITT_X, 3);

    Ok(())
}
