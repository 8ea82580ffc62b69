//! PNG reading and writing for [`Image`](pixel_dither::Image).

mod png_io;

pub use png_io::{decode_png, encode_png, read_png, write_png};
