/// 3x3 sobel kernel for the x direction, in row major order.
#[rustfmt::skip]
pub const SOBEL_X: [f32; 9] = [
    -1.0, -2.0, -1.0,
     0.0,  0.0,  0.0,
     1.0,  2.0,  1.0,
];

/// 3x3 sobel kernel for the y direction, in row major order.
#[rustfmt::skip]
pub const SOBEL_Y: [f32; 9] = [
    -1.0, 0.0, 1.0,
    -2.0, 0.0, 2.0,
    -1.0, 0.0, 1.0,
];

/// 3x3 prewitt kernel for the x direction, in row major order.
#[rustfmt::skip]
pub const PREWITT_X: [f32; 9] = [
    -1.0, -1.0, -1.0,
     0.0,  0.0,  0.0,
     1.0,  1.0,  1.0,
];

/// 3x3 prewitt kernel for the y direction, in row major order.
#[rustfmt::skip]
pub const PREWITT_Y: [f32; 9] = [
    -1.0, 0.0, 1.0,
    -1.0, 0.0, 1.0,
    -1.0, 0.0, 1.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_reference() {
        assert_eq!(SOBEL_X, [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0]);
        assert_eq!(SOBEL_Y, [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0]);
        assert_eq!(PREWITT_X, [-1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(PREWITT_Y, [-1.0, 0.0, 1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn directional_pairs_are_transposes() {
        for (x, y) in [(SOBEL_X, SOBEL_Y), (PREWITT_X, PREWITT_Y)] {
            for row in 0..3 {
                for col in 0..3 {
                    assert_eq!(x[row * 3 + col], y[col * 3 + row]);
                }
            }
        }
    }

    #[test]
    fn constants_sum_to_zero() {
        for kernel in [SOBEL_X, SOBEL_Y, PREWITT_X, PREWITT_Y] {
            assert_eq!(kernel.iter().sum::<f32>(), 0.0);
        }
    }
}
