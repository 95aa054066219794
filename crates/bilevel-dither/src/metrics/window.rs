//! Gaussian weighting window for SSIM, generated by build.rs.

include!(concat!(env!("OUT_DIR"), "/ssim_window.rs"));
