//! Shared kernel machinery: border policies, separable and 3x3 convolution,
//! and a sliding-histogram median filter.

use crate::buffer::{PixelBuffer, CHANNELS};

/// Round a requested kernel size up to the nearest odd value >= 1.
#[inline]
pub fn odd_kernel_size(size: usize) -> usize {
    if size == 0 {
        1
    } else if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}

/// Mirror an out-of-range index without repeating the edge sample
/// (`gfedcb|abcdefgh|gfedcba`).
#[inline]
pub(crate) fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let n = len as isize;
    let mut i = i;
    // Kernels wider than the image need more than one reflection.
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * (n - 1) - i;
        } else {
            return i as usize;
        }
    }
}

/// Clamp an out-of-range index to the nearest edge (`aaa|abcdefgh|hhh`).
#[inline]
pub(crate) fn replicate(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Convolve every channel with `kernel` horizontally, then vertically.
///
/// `kernel` must have odd length. Borders use [`reflect_101`].
pub(crate) fn convolve_separable(image: &PixelBuffer, kernel: &[f32]) -> PixelBuffer {
    debug_assert!(kernel.len() % 2 == 1, "Kernel length must be odd");
    let (w, h) = (image.width() as usize, image.height() as usize);
    let radius = (kernel.len() / 2) as isize;
    let src = image.pixels();

    // Horizontal pass
    let mut horizontal = vec![0.0f32; src.len()];
    for y in 0..h {
        let row = y * w;
        for x in 0..w {
            let mut acc = [0.0f32; CHANNELS];
            for (k, weight) in kernel.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - radius, w);
                let idx = (row + sx) * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] += weight * src[idx + c] as f32;
                }
            }
            let out = (row + x) * CHANNELS;
            horizontal[out..out + CHANNELS].copy_from_slice(&acc);
        }
    }

    // Vertical pass
    let mut output = vec![0u8; src.len()];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; CHANNELS];
            for (k, weight) in kernel.iter().enumerate() {
                let sy = reflect_101(y as isize + k as isize - radius, h);
                let idx = (sy * w + x) * CHANNELS;
                for c in 0..CHANNELS {
                    acc[c] += weight * horizontal[idx + c];
                }
            }
            let out = (y * w + x) * CHANNELS;
            for c in 0..CHANNELS {
                output[out + c] = to_u8(acc[c]);
            }
        }
    }

    image.with_samples(output)
}

/// Correlate every channel with a 3x3 kernel (row-major, `kernel[dy][dx]`).
///
/// Borders use [`reflect_101`]; results are rounded and clamped to `[0, 255]`.
pub(crate) fn convolve_3x3(image: &PixelBuffer, kernel: &[[f32; 3]; 3]) -> PixelBuffer {
    let (w, h) = (image.width() as usize, image.height() as usize);
    let src = image.pixels();
    let mut output = vec![0u8; src.len()];

    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; CHANNELS];
            for (dy, kernel_row) in kernel.iter().enumerate() {
                let sy = reflect_101(y as isize + dy as isize - 1, h);
                for (dx, weight) in kernel_row.iter().enumerate() {
                    if *weight == 0.0 {
                        continue;
                    }
                    let sx = reflect_101(x as isize + dx as isize - 1, w);
                    let idx = (sy * w + sx) * CHANNELS;
                    for c in 0..CHANNELS {
                        acc[c] += weight * src[idx + c] as f32;
                    }
                }
            }
            let out = (y * w + x) * CHANNELS;
            for c in 0..CHANNELS {
                output[out + c] = to_u8(acc[c]);
            }
        }
    }

    image.with_samples(output)
}

/// Median filter with a square `size x size` window per channel.
///
/// `size` must be odd. Borders use [`replicate`]. Each row keeps one
/// 256-bin histogram per channel and slides it one column at a time.
pub(crate) fn median_filter(image: &PixelBuffer, size: usize) -> PixelBuffer {
    debug_assert!(size % 2 == 1, "Median window must be odd");
    let (w, h) = (image.width() as usize, image.height() as usize);
    let radius = (size / 2) as isize;
    let src = image.pixels();
    let rank = (size * size / 2) as u32;
    let mut output = vec![0u8; src.len()];

    let sample = |x: isize, y: isize, c: usize| -> usize {
        let sx = replicate(x, w);
        let sy = replicate(y, h);
        src[(sy * w + sx) * CHANNELS + c] as usize
    };

    for y in 0..h as isize {
        let mut hist = [[0u32; 256]; CHANNELS];

        // Seed with the window centred on x = 0
        for wy in y - radius..=y + radius {
            for wx in -radius..=radius {
                for (c, channel) in hist.iter_mut().enumerate() {
                    channel[sample(wx, wy, c)] += 1;
                }
            }
        }

        for x in 0..w as isize {
            if x > 0 {
                let leaving = x - radius - 1;
                let entering = x + radius;
                for wy in y - radius..=y + radius {
                    for (c, channel) in hist.iter_mut().enumerate() {
                        channel[sample(leaving, wy, c)] -= 1;
                        channel[sample(entering, wy, c)] += 1;
                    }
                }
            }

            let out = (y as usize * w + x as usize) * CHANNELS;
            for (c, channel) in hist.iter().enumerate() {
                output[out + c] = histogram_rank(channel, rank);
            }
        }
    }

    image.with_samples(output)
}

/// Smallest value whose cumulative count exceeds `rank`.
#[inline]
fn histogram_rank(hist: &[u32; 256], rank: u32) -> u8 {
    let mut seen = 0;
    for (value, count) in hist.iter().enumerate() {
        seen += count;
        if seen > rank {
            return value as u8;
        }
    }
    255
}
