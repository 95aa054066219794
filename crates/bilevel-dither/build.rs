use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 11x11 Gaussian weights (sigma ~1.5) used by the browser ditherer's SSIM,
/// six decimal places. Emitted verbatim: the table sums to ~2.731, not 1,
/// and scores are only comparable with that tool when it is left as is.
const RAW_WINDOW: [[f64; 11]; 11] = [
    [0.000003, 0.000022, 0.000105, 0.000323, 0.000649, 0.000859, 0.000649, 0.000323, 0.000105, 0.000022, 0.000003],
    [0.000022, 0.000147, 0.000685, 0.002113, 0.004245, 0.005620, 0.004245, 0.002113, 0.000685, 0.000147, 0.000022],
    [0.000105, 0.000685, 0.003198, 0.009866, 0.019818, 0.026225, 0.019818, 0.009866, 0.003198, 0.000685, 0.000105],
    [0.000323, 0.002113, 0.009866, 0.030454, 0.061172, 0.080891, 0.061172, 0.030454, 0.009866, 0.002113, 0.000323],
    [0.000649, 0.004245, 0.019818, 0.061172, 0.122290, 0.161630, 0.122290, 0.061172, 0.019818, 0.004245, 0.000649],
    [0.000859, 0.005620, 0.026225, 0.080891, 0.161630, 0.213800, 0.161630, 0.080891, 0.026225, 0.005620, 0.000859],
    [0.000649, 0.004245, 0.019818, 0.061172, 0.122290, 0.161630, 0.122290, 0.061172, 0.019818, 0.004245, 0.000649],
    [0.000323, 0.002113, 0.009866, 0.030454, 0.061172, 0.080891, 0.061172, 0.030454, 0.009866, 0.002113, 0.000323],
    [0.000105, 0.000685, 0.003198, 0.009866, 0.019818, 0.026225, 0.019818, 0.009866, 0.003198, 0.000685, 0.000105],
    [0.000022, 0.000147, 0.000685, 0.002113, 0.004245, 0.005620, 0.004245, 0.002113, 0.000685, 0.000147, 0.000022],
    [0.000003, 0.000022, 0.000105, 0.000323, 0.000649, 0.000859, 0.000649, 0.000323, 0.000105, 0.000022, 0.000003],
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("ssim_window.rs");
    let mut file = File::create(&dest_path).unwrap();

    writeln!(file, "/// 11x11 Gaussian SSIM window (sigma ~1.5). Weights sum to ~2.731.").unwrap();
    writeln!(file, "/// Index: [dy + 5][dx + 5] relative to the window center.").unwrap();
    writeln!(file, "pub static SSIM_WINDOW: [[f64; 11]; 11] = [").unwrap();
    for row in RAW_WINDOW.iter() {
        write!(file, "    [").unwrap();
        for weight in row.iter() {
            write!(file, "{:?}, ", weight).unwrap();
        }
        writeln!(file, "],").unwrap();
    }
    writeln!(file, "];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
