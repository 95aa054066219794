//! Assertion helpers for tests.

use bilevel_dither::PixelBuffer;

/// Assert every RGB sample is 0 or 255 and every alpha is 255.
pub fn assert_bilevel(buffer: &PixelBuffer) {
    for (i, px) in buffer.pixels().enumerate() {
        assert!(
            px[..3].iter().all(|&v| v == 0 || v == 255),
            "pixel {} is not bilevel: {:?}",
            i,
            px
        );
        assert_eq!(px[3], 255, "pixel {} alpha is {}", i, px[3]);
    }
}

/// Assert every pixel has equal R, G and B.
pub fn assert_gray(buffer: &PixelBuffer) {
    for (i, px) in buffer.pixels().enumerate() {
        assert!(
            px[0] == px[1] && px[1] == px[2],
            "pixel {} is not gray: {:?}",
            i,
            px
        );
    }
}
