use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use pixel_dither::{Image, Pixel};

use crate::error::CodecError;

/// Read a PNG file into an RGB image.
///
/// Palette, low bit depth and 16-bit images are normalized to 8-bit
/// channels. Alpha is discarded.
pub fn read_png(path: &Path) -> Result<Image, CodecError> {
    let file = std::fs::File::open(path)?;
    let image = decode(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Read PNG"
    );
    Ok(image)
}

/// Write an image to a PNG file.
pub fn write_png(path: &Path, image: &Image) -> Result<(), CodecError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}

/// Decode PNG bytes into an RGB image.
pub fn decode_png(data: &[u8]) -> Result<Image, CodecError> {
    decode(Cursor::new(data))
}

/// Encode an image as PNG bytes.
///
/// Images made only of pure black and pure white pixels (such as dither
/// output) are written as 1-bit grayscale; everything else as 8-bit RGB.
pub fn encode_png(image: &Image) -> Result<Vec<u8>, CodecError> {
    if image.is_empty() {
        return Err(CodecError::EmptyImage);
    }
    let width = u32::try_from(image.width())
        .map_err(|_| CodecError::Encode(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| CodecError::Encode(format!("height {} too large", image.height())))?;

    let (color_type, bit_depth, data) = if is_bilevel(image) {
        let bits: Vec<u8> = image
            .pixels()
            .iter()
            .map(|p| u8::from(p.red() == 255))
            .collect();
        (
            png::ColorType::Grayscale,
            png::BitDepth::One,
            pack_bits(&bits, image.width()),
        )
    } else {
        (
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            image.to_rgb_bytes(),
        )
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
    }
    Ok(buf.into_inner())
}

fn decode<R: Read>(reader: R) -> Result<Image, CodecError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];
    let width = info.width as usize;
    let height = info.height as usize;

    let pixels: Vec<Pixel> = match info.color_type {
        png::ColorType::Rgb => {
            return Image::from_rgb_bytes(width, height, data)
                .map_err(|e| CodecError::Decode(e.to_string()));
        }
        png::ColorType::Grayscale => data.iter().map(|&v| Pixel::from([v, v, v])).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|c| Pixel::from([c[0], c[0], c[0]]))
            .collect(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|c| Pixel::from([c[0], c[1], c[2]]))
            .collect(),
        other => {
            return Err(CodecError::UnsupportedFormat(format!("{other:?}")));
        }
    };

    Image::from_pixels(width, height, pixels).map_err(|e| CodecError::Decode(e.to_string()))
}

/// True when every pixel is pure black or pure white.
fn is_bilevel(image: &Image) -> bool {
    image
        .pixels()
        .iter()
        .all(|p| matches!(p.to_bytes(), [0, 0, 0] | [255, 255, 255]))
}

/// Pack 0/1 values into 1-bit PNG row data, MSB first, rows padded to a byte.
fn pack_bits(bits: &[u8], width: usize) -> Vec<u8> {
    let bytes_per_row = width.div_ceil(8);
    let mut packed = Vec::with_capacity(bytes_per_row * (bits.len() / width));

    for row in bits.chunks(width) {
        let mut byte = 0u8;
        for (i, &bit) in row.iter().enumerate() {
            byte |= (bit & 1) << (7 - (i % 8));
            if i % 8 == 7 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
