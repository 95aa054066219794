//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how quantization error is distributed to
//! neighboring pixels that the raster scan has not reached yet.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` and a weight; a neighbor receives
/// `error * weight / divisor`. All built-in kernels propagate 100% of the
/// error (weights sum to the divisor), although contributions that fall
/// outside the image are dropped.
///
/// # Causality
///
/// Every offset satisfies `dy > 0 || (dy == 0 && dx > 0)`, so propagation
/// only ever targets pixels the left-to-right, top-to-bottom scan has not
/// finalized. See [`Kernel::is_causal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u32)],

    /// Common divisor for the weights. Always > 0.
    pub divisor: u32,
}

impl Kernel {
    /// True if every entry points forward in raster order.
    pub fn is_causal(&self) -> bool {
        self.entries
            .iter()
            .all(|&(dx, dy, _)| dy > 0 || (dy == 0 && dx > 0))
    }

    /// Sum of all weights.
    pub fn weight_sum(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| w).sum()
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Stucki dithering kernel.
///
/// Same footprint as JJN with heavier center weights.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};

/// The closed set of built-in diffusion kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    FloydSteinberg,
    Stucki,
    JarvisJudiceNinke,
}

impl KernelKind {
    /// Every built-in kernel.
    pub const ALL: [KernelKind; 3] = [
        KernelKind::FloydSteinberg,
        KernelKind::Stucki,
        KernelKind::JarvisJudiceNinke,
    ];

    /// The weight table for this kernel.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            KernelKind::FloydSteinberg => &FLOYD_STEINBERG,
            KernelKind::Stucki => &STUCKI,
            KernelKind::JarvisJudiceNinke => &JARVIS_JUDICE_NINKE,
        }
    }
}
