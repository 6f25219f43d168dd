//! Shaping a PNG icon: clip it to the mask, lay it over the background fill
//! and encode the result.

use std::io::{Read, Write};

use image::{
    codecs::png::PngEncoder,
    error::{LimitError, LimitErrorKind},
    ColorType, ImageEncoder, ImageError, ImageFormat, Rgba, RgbaImage,
};
use thiserror::Error;
use tiny_skia::{ColorU8, FillRule, Paint, Pixmap, PixmapPaint, Transform};

use crate::color::BackgroundColor;
use crate::mask::{build_mask, rasterize_mask, CornerFlags};

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("failed to decode PNG icon")]
    Decode(#[source] ImageError),

    #[error("failed to encode PNG icon")]
    Encode(#[source] ImageError),
}

/// Read a PNG icon from `input`, shape it and write the PNG result to `output`.
///
/// Nothing is written when the input can't be decoded.
pub fn icon<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    flags: CornerFlags,
    bg: BackgroundColor,
) -> Result<(), ShapeError> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(|e| ShapeError::Decode(ImageError::IoError(e)))?;

    let source = decode_png(&bytes)?;
    let shaped = shape(&source, flags, bg)?;

    encode_png(&shaped, &mut output)?;
    output
        .flush()
        .map_err(|e| ShapeError::Encode(ImageError::IoError(e)))
}

pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, ShapeError> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(ShapeError::Decode)?;
    Ok(image.to_rgba8())
}

pub fn encode_png<W: Write>(image: &RgbaImage, w: W) -> Result<(), ShapeError> {
    PngEncoder::new(w)
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(ShapeError::Encode)
}

/// Shape `source` into a `side` x `side` icon, `side` being its smaller
/// dimension.
///
/// The source is cropped from the top-left corner, clipped to the mask and
/// drawn over `bg`, which is itself filled only inside the mask.
pub fn shape(
    source: &RgbaImage,
    flags: CornerFlags,
    bg: BackgroundColor,
) -> Result<RgbaImage, ShapeError> {
    let side = source.width().min(source.height());

    let path = build_mask(side, flags).ok_or_else(unsupported_size)?;
    let mask = rasterize_mask(&path, side).ok_or_else(unsupported_size)?;

    let mut surface = Pixmap::new(side, side).ok_or_else(unsupported_size)?;
    paint_source(&mut surface, source);
    surface.apply_mask(&mask);

    let mut background = Pixmap::new(side, side).ok_or_else(unsupported_size)?;
    if !bg.is_transparent() {
        let mut paint = Paint::default();
        paint.set_color_rgba8(bg.red, bg.green, bg.blue, bg.alpha);
        paint.anti_alias = true;
        background.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    background.draw_pixmap(
        0,
        0,
        surface.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );

    Ok(pixmap_to_rgba_image(&background))
}

fn unsupported_size() -> ShapeError {
    ShapeError::Decode(ImageError::Limits(LimitError::from_kind(
        LimitErrorKind::DimensionError,
    )))
}

/// Copy the top-left `side` x `side` block of `source` into `surface`.
fn paint_source(surface: &mut Pixmap, source: &RgbaImage) {
    let side = surface.width();
    let pixels = surface.pixels_mut();

    for y in 0..side {
        for x in 0..side {
            let Rgba([r, g, b, a]) = *source.get_pixel(x, y);
            pixels[(y * side + x) as usize] = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
    }
}

fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());

    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    image
}
