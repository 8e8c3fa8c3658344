use std::io::Cursor;

use crate::image_pipeline::codec::{ImageReader, ImageWriter};
use crate::image_pipeline::common::config::EditorConfig;
use crate::image_pipeline::common::error::EditorError;
use crate::image_pipeline::model::PixelBuffer;
use crate::image_pipeline::ppm::tokens::Tokens;
use crate::image_pipeline::ppm::{PpmReader, PpmWriter};

fn decode(text: &str) -> Result<PixelBuffer, EditorError> {
    PpmReader.read_image(&mut Cursor::new(text.as_bytes()))
}

fn encode(image: &PixelBuffer) -> String {
    let mut out = Vec::new();
    PpmWriter
        .write_image(image, &mut out, &EditorConfig::default())
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_tokens_skip_comments() {
    let tokens: Vec<&str> = Tokens::new("# header\nP3 # trailing\n  2\t3\n#x 9\n255").collect();
    assert_eq!(tokens, vec!["P3", "2", "3", "255"]);
}

#[test]
fn test_decode_basic() {
    let image = decode("P3\n2 1\n255\n1 2 3 4 5 6\n").unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 1);
    assert_eq!(image.max_value(), 255);
    assert_eq!(image.get_pixel(0, 0).unwrap(), [1, 2, 3]);
    assert_eq!(image.get_pixel(1, 0).unwrap(), [4, 5, 6]);
}

#[test]
fn test_decode_row_major_with_comments() {
    let text = "# made by hand\nP3\n# size\n2 2\n100\n0 0 0 1 1 1 # first row\n2 2 2\n# gap\n3 3 3\n";
    let image = decode(text).unwrap();
    assert_eq!(image.get_pixel(1, 0).unwrap(), [1, 1, 1]);
    assert_eq!(image.get_pixel(0, 1).unwrap(), [2, 2, 2]);
    assert_eq!(image.get_pixel(1, 1).unwrap(), [3, 3, 3]);
}

#[test]
fn test_decode_rejects_wrong_magic() {
    assert!(matches!(
        decode("P6\n1 1\n255\n0 0 0\n"),
        Err(EditorError::FormatError(_))
    ));
}

#[test]
fn test_decode_rejects_bad_dimensions() {
    assert!(matches!(
        decode("P3\n-2 1\n255\n0 0 0\n"),
        Err(EditorError::InvalidDimension { width: -2, height: 1 })
    ));
    assert!(matches!(
        decode("P3\n1 -1\n255\n0 0 0\n"),
        Err(EditorError::InvalidDimension { .. })
    ));
    assert!(matches!(
        decode("P3\n0 1\n255\n"),
        Err(EditorError::InvalidDimension { .. })
    ));
}

#[test]
fn test_decode_rejects_bad_max_value() {
    assert!(matches!(
        decode("P3\n1 1\n0\n0 0 0\n"),
        Err(EditorError::InvalidRange(_))
    ));
    assert!(matches!(
        decode("P3\n1 1\n-5\n0 0 0\n"),
        Err(EditorError::InvalidRange(_))
    ));
}

#[test]
fn test_decode_rejects_truncated_pixels() {
    assert!(matches!(
        decode("P3\n2 2\n255\n1 2 3 4 5 6 7 8 9\n"),
        Err(EditorError::TruncatedInput { expected: 12, found: 9 })
    ));
}

#[test]
fn test_decode_rejects_huge_header_without_data() {
    assert!(matches!(
        decode("P3\n40000 40000\n255\n1 2 3\n"),
        Err(EditorError::TruncatedInput { found: 3, .. })
    ));
}

#[test]
fn test_decode_rejects_overflowing_dimensions() {
    assert!(matches!(
        decode("P3\n4294967295 4294967295\n255\n1 2 3\n"),
        Err(EditorError::TruncatedInput { expected: usize::MAX, found: 3 })
    ));
}

#[test]
fn test_decode_rejects_truncated_header_and_empty_input() {
    assert!(matches!(decode(""), Err(EditorError::TruncatedInput { .. })));
    assert!(matches!(
        decode("P3\n2"),
        Err(EditorError::TruncatedInput { .. })
    ));
}

#[test]
fn test_decode_rejects_out_of_range_channels() {
    assert!(matches!(
        decode("P3\n1 1\n255\n0 256 0\n"),
        Err(EditorError::InvalidRange(_))
    ));
    assert!(matches!(
        decode("P3\n1 1\n255\n0 0 -1\n"),
        Err(EditorError::InvalidRange(_))
    ));
}

#[test]
fn test_decode_rejects_non_numeric_tokens() {
    assert!(matches!(
        decode("P3\nwide 1\n255\n0 0 0\n"),
        Err(EditorError::FormatError(_))
    ));
    assert!(matches!(
        decode("P3\n1 1\n255\n0 x 0\n"),
        Err(EditorError::FormatError(_))
    ));
}

#[test]
fn test_decode_rejects_invalid_utf8() {
    let bytes = [b'P', b'3', b' ', 0xFF, 0xFE];
    let result = PpmReader.read_image(&mut Cursor::new(&bytes[..]));
    assert!(matches!(result, Err(EditorError::FormatError(_))));
}

#[test]
fn test_encode_single_pixel() {
    let mut image = PixelBuffer::new(1, 1, 255).unwrap();
    image.set_pixel(0, 0, [254, 254, 254]).unwrap();
    assert_eq!(encode(&image), "P3\n1 1\n255\n 254 254 254\n");
}

#[test]
fn test_encode_layout() {
    let mut image = PixelBuffer::new(2, 2, 9).unwrap();
    image.set_pixel(0, 0, [1, 2, 3]).unwrap();
    image.set_pixel(1, 0, [4, 5, 6]).unwrap();
    image.set_pixel(1, 1, [9, 9, 9]).unwrap();

    assert_eq!(
        encode(&image),
        "P3\n2 2\n9\n 1 2 3 4 5 6\n 0 0 0 9 9 9\n"
    );
}

#[test]
fn test_round_trip() {
    let mut image = PixelBuffer::new(5, 3, 1023).unwrap();
    for y in 0..3 {
        for x in 0..5 {
            image
                .set_pixel(x, y, [x * 200, y * 300, (x + y) * 97])
                .unwrap();
        }
    }

    let decoded = decode(&encode(&image)).unwrap();
    assert_eq!(decoded, image);
}
