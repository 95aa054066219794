pub mod png_io;

pub use png_io::{decode_png, encode_png, output_path, read_png, write_png};
