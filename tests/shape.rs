use image::{Rgba, RgbaImage};
use jollaicon::{decode_png, encode_png, icon, shape, BackgroundColor, CornerFlags, ShapeError};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[test]
fn test_rounded_red_icon() {
    let source = RgbaImage::from_pixel(128, 128, RED);

    let shaped = shape(&source, CornerFlags::rounded(), BackgroundColor::TRANSPARENT)
        .expect("Failed to shape icon");

    assert_eq!(shaped.dimensions(), (128, 128));
    assert_eq!(*shaped.get_pixel(0, 0), CLEAR);
    assert_eq!(*shaped.get_pixel(64, 64), RED);
    for (x, y) in [(127, 0), (127, 127), (0, 127)] {
        assert_eq!(
            *shaped.get_pixel(x, y),
            CLEAR,
            "corner ({}, {}) should be transparent",
            x,
            y
        );
    }
}

#[test]
fn test_square_flags_crop_only() {
    let source = RgbaImage::from_pixel(100, 200, BLUE);

    let shaped = shape(&source, CornerFlags::square(), BackgroundColor::TRANSPARENT)
        .expect("Failed to shape icon");

    assert_eq!(shaped.dimensions(), (100, 100));
    assert!(
        shaped.pixels().all(|p| *p == BLUE),
        "every pixel should stay opaque blue"
    );
}

#[test]
fn test_square_flags_keep_gradient() {
    let source = create_gradient_image(80, 60);

    let shaped = shape(&source, CornerFlags::square(), BackgroundColor::TRANSPARENT)
        .expect("Failed to shape icon");

    for (x, y, pixel) in shaped.enumerate_pixels() {
        assert_eq!(pixel, source.get_pixel(x, y), "pixel ({}, {}) changed", x, y);
    }
}

#[test]
fn test_square_flags_are_idempotent() {
    let source = create_gradient_image(64, 64);

    let once = shape(&source, CornerFlags::square(), BackgroundColor::TRANSPARENT).unwrap();
    let twice = shape(&once, CornerFlags::square(), BackgroundColor::TRANSPARENT).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_fill_with_square_top_left() {
    let source = RgbaImage::from_pixel(64, 64, CLEAR);
    let flags = CornerFlags {
        top_left: true,
        ..CornerFlags::rounded()
    };

    let shaped = shape(&source, flags, BackgroundColor::WHITE).expect("Failed to shape icon");

    assert_eq!(*shaped.get_pixel(0, 0), WHITE, "square corner is filled");
    assert_eq!(*shaped.get_pixel(32, 32), WHITE, "interior is filled");
    assert_eq!(*shaped.get_pixel(10, 5), WHITE, "square quadrant is filled");
    assert_eq!(
        *shaped.get_pixel(63, 63),
        CLEAR,
        "outside the bottom-right arc stays transparent"
    );
    assert_eq!(*shaped.get_pixel(63, 0), CLEAR);
    assert_eq!(*shaped.get_pixel(0, 63), CLEAR);
}

#[test]
fn test_output_dimensions_for_every_flag_combination() {
    let source = RgbaImage::from_pixel(50, 37, RED);

    for bits in 0..16u8 {
        let flags = CornerFlags {
            top_left: bits & 1 != 0,
            top_right: bits & 2 != 0,
            bottom_right: bits & 4 != 0,
            bottom_left: bits & 8 != 0,
        };
        let shaped = shape(&source, flags, BackgroundColor::rgb(0, 0, 0)).unwrap();
        assert_eq!(shaped.dimensions(), (37, 37), "{:?}", flags);
    }
}

#[test]
fn test_icon_streams_png() {
    let source = create_gradient_image(48, 48);
    let mut input = Vec::new();
    encode_png(&source, &mut input).unwrap();

    let mut output = Vec::new();
    icon(
        &input[..],
        &mut output,
        CornerFlags::square(),
        BackgroundColor::TRANSPARENT,
    )
    .expect("Failed to shape icon");

    let decoded = decode_png(&output).expect("output should be a valid PNG");
    assert_eq!(decoded, source);
}

#[test]
fn test_icon_rejects_non_png_input() {
    let mut jpeg_like = Vec::new();
    let source = create_gradient_image(8, 8);
    image::DynamicImage::ImageRgba8(source)
        .to_rgb8()
        .write_to(
            &mut std::io::Cursor::new(&mut jpeg_like),
            image::ImageOutputFormat::Jpeg(90),
        )
        .unwrap();

    let mut output = Vec::new();
    let result = icon(
        &jpeg_like[..],
        &mut output,
        CornerFlags::rounded(),
        BackgroundColor::TRANSPARENT,
    );

    assert!(matches!(result, Err(ShapeError::Decode(_))));
    assert!(output.is_empty());
}

#[test]
fn test_icon_reports_write_failure() {
    struct FailingWriter;

    impl std::io::Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut input = Vec::new();
    encode_png(&RgbaImage::from_pixel(16, 16, RED), &mut input).unwrap();

    let result = icon(
        &input[..],
        FailingWriter,
        CornerFlags::rounded(),
        BackgroundColor::TRANSPARENT,
    );

    assert!(matches!(result, Err(ShapeError::Encode(_))));
}

/// Opaque gradient, so premultiplication is lossless
fn create_gradient_image(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let red = (255.0 * x as f32 / width as f32) as u8;
        let green = (255.0 * y as f32 / height as f32) as u8;
        *pixel = Rgba([red, green, 128, 255]);
    }

    image
}
