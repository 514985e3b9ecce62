//! Luma calculation using ITU-R BT.601 coefficients (0.299, 0.587, 0.114).
//!
//! The weights are fixed-point and sum to exactly `1 << 14`, so a gray pixel
//! maps to itself.

const SHIFT: u32 = 14;
const FIXED_R: u32 = 4899;
const FIXED_G: u32 = 9617;
const FIXED_B: u32 = 1868;
const ROUND: u32 = 1 << (SHIFT - 1);

/// Calculate luma from u8 RGB values (0 to 255), rounded to nearest.
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let sum = FIXED_R * u32::from(r) + FIXED_G * u32::from(g) + FIXED_B * u32::from(b);
    ((sum + ROUND) >> SHIFT) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        assert_eq!(FIXED_R + FIXED_G + FIXED_B, 1 << SHIFT);
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in 0..=255u8 {
            assert_eq!(calculate_luma_u8(v, v, v), v);
        }
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(calculate_luma_u8(0, 0, 0), 0);
        assert_eq!(calculate_luma_u8(255, 255, 255), 255);
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 ≈ 76.2
        assert_eq!(calculate_luma_u8(255, 0, 0), 76);
        // 0.587 * 255 ≈ 149.7
        assert_eq!(calculate_luma_u8(0, 255, 0), 150);
        // 0.114 * 255 ≈ 29.1
        assert_eq!(calculate_luma_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_fixed_point_matches_float() {
        for r in [0u8, 64, 128, 192, 255] {
            for g in [0u8, 64, 128, 192, 255] {
                for b in [0u8, 64, 128, 192, 255] {
                    let float =
                        (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32).round() as i32;
                    let fixed = calculate_luma_u8(r, g, b) as i32;
                    assert!(
                        (float - fixed).abs() <= 1,
                        "fixed and float luma should match for ({}, {}, {})",
                        r,
                        g,
                        b
                    );
                }
            }
        }
    }
}
