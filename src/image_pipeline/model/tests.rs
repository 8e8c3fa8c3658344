use crate::image_pipeline::common::error::EditorError;
use crate::image_pipeline::model::{BUCKETS, Histogram, ImageCatalogue, PixelBuffer};

fn sample_2x2() -> PixelBuffer {
    let mut image = PixelBuffer::new(2, 2, 255).unwrap();
    image.set_pixel(0, 0, [255, 0, 0]).unwrap();
    image.set_pixel(1, 0, [0, 255, 0]).unwrap();
    image.set_pixel(0, 1, [0, 0, 255]).unwrap();
    image.set_pixel(1, 1, [30, 60, 90]).unwrap();
    image
}

#[test]
fn test_new_rejects_zero_dimensions() {
    assert!(matches!(
        PixelBuffer::new(0, 5, 255),
        Err(EditorError::InvalidDimension { width: 0, height: 5 })
    ));
    assert!(matches!(
        PixelBuffer::new(5, 0, 255),
        Err(EditorError::InvalidDimension { .. })
    ));
}

#[test]
fn test_new_rejects_unaddressable_dimensions() {
    assert!(matches!(
        PixelBuffer::new(u32::MAX, u32::MAX, 255),
        Err(EditorError::InvalidDimension { width: 4294967295, height: 4294967295 })
    ));
}

#[test]
fn test_new_rejects_zero_max_value() {
    assert!(matches!(
        PixelBuffer::new(3, 3, 0),
        Err(EditorError::InvalidRange(_))
    ));
}

#[test]
fn test_new_image_is_black() {
    for &(w, h, max) in &[(1, 1, 1), (3, 2, 255), (7, 5, 65535)] {
        let image = PixelBuffer::new(w, h, max).unwrap();
        assert_eq!(image.width(), w);
        assert_eq!(image.height(), h);
        assert_eq!(image.max_value(), max);
        assert_eq!(image.pixels().len(), (w * h * 3) as usize);
        for y in 0..h {
            for x in 0..w {
                assert_eq!(image.get_pixel(x, y).unwrap(), [0, 0, 0]);
            }
        }
    }
}

#[test]
fn test_set_then_get_pixel() {
    let mut image = PixelBuffer::new(4, 3, 100).unwrap();
    image.set_pixel(3, 2, [100, 0, 42]).unwrap();
    image.set_pixel(0, 0, [1, 2, 3]).unwrap();

    assert_eq!(image.get_pixel(3, 2).unwrap(), [100, 0, 42]);
    assert_eq!(image.get_pixel(0, 0).unwrap(), [1, 2, 3]);
    assert_eq!(image.get_pixel(1, 1).unwrap(), [0, 0, 0]);
}

#[test]
fn test_set_pixel_out_of_range() {
    let mut image = PixelBuffer::new(2, 2, 255).unwrap();
    for rgb in [[256, 0, 0], [0, 256, 0], [0, 0, 1000]] {
        assert!(matches!(
            image.set_pixel(0, 0, rgb),
            Err(EditorError::InvalidRange(_))
        ));
    }
    assert_eq!(image.get_pixel(0, 0).unwrap(), [0, 0, 0]);
}

#[test]
fn test_coordinates_out_of_bounds() {
    let mut image = PixelBuffer::new(2, 3, 255).unwrap();
    assert!(matches!(
        image.set_pixel(2, 0, [0, 0, 0]),
        Err(EditorError::OutOfBounds { x: 2, y: 0, .. })
    ));
    assert!(matches!(
        image.get_pixel(0, 3),
        Err(EditorError::OutOfBounds { .. })
    ));
}

#[test]
fn test_returned_pixel_is_a_copy() {
    let mut image = PixelBuffer::new(1, 1, 255).unwrap();
    image.set_pixel(0, 0, [10, 20, 30]).unwrap();

    let mut px = image.get_pixel(0, 0).unwrap();
    px[0] = 200;

    assert_eq!(image.get_pixel(0, 0).unwrap(), [10, 20, 30]);
}

#[test]
fn test_from_raw_validates() {
    assert!(PixelBuffer::from_raw(1, 2, 10, vec![1, 2, 3, 4, 5, 6]).is_ok());
    assert!(matches!(
        PixelBuffer::from_raw(1, 2, 10, vec![1, 2, 3]),
        Err(EditorError::TruncatedInput { expected: 6, found: 3 })
    ));
    assert!(matches!(
        PixelBuffer::from_raw(1, 1, 10, vec![1, 11, 3]),
        Err(EditorError::InvalidRange(_))
    ));
}

#[test]
fn test_histogram_sums_to_pixel_count() {
    let histogram = Histogram::compute(&sample_2x2());
    for table in [
        histogram.red(),
        histogram.green(),
        histogram.blue(),
        histogram.intensity(),
    ] {
        assert_eq!(table.len(), BUCKETS);
        assert_eq!(table.iter().sum::<u64>(), 4);
    }
}

#[test]
fn test_histogram_buckets() {
    let histogram = Histogram::compute(&sample_2x2());

    assert_eq!(histogram.red()[255], 1);
    assert_eq!(histogram.red()[0], 2);
    assert_eq!(histogram.red()[30], 1);
    assert_eq!(histogram.green()[60], 1);
    assert_eq!(histogram.blue()[90], 1);
    // 255/3 for each primary, 180/3 for the last pixel
    assert_eq!(histogram.intensity()[85], 3);
    assert_eq!(histogram.intensity()[60], 1);
    assert_eq!(histogram.overall_max_count(), 3);
}

#[test]
fn test_histogram_clamps_high_bit_depth() {
    let mut image = PixelBuffer::new(1, 2, 1000).unwrap();
    image.set_pixel(0, 0, [1000, 300, 3]).unwrap();
    image.set_pixel(0, 1, [0, 0, 0]).unwrap();

    let histogram = Histogram::compute(&image);

    assert_eq!(histogram.red()[255], 1);
    assert_eq!(histogram.green()[255], 1);
    assert_eq!(histogram.blue()[3], 1);
    // (255 + 255 + 3) / 3
    assert_eq!(histogram.intensity()[171], 1);
    assert_eq!(histogram.overall_max_count(), 1);
}

#[test]
fn test_histogram_snapshot_is_independent() {
    let histogram = Histogram::compute(&sample_2x2());
    let mut copy = *histogram.red();
    copy[0] = 999;
    assert_eq!(histogram.red()[0], 2);
}

#[test]
fn test_catalogue_add_rejects_duplicates() {
    let mut catalogue = ImageCatalogue::new();
    catalogue.add("koala", sample_2x2()).unwrap();

    assert!(matches!(
        catalogue.add("koala", sample_2x2()),
        Err(EditorError::AlreadyExists(name)) if name == "koala"
    ));
    assert_eq!(catalogue.len(), 1);
}

#[test]
fn test_catalogue_put_overwrites() {
    let mut catalogue = ImageCatalogue::new();
    catalogue.put("koala", sample_2x2()).unwrap();
    catalogue.put("koala", PixelBuffer::new(1, 1, 255).unwrap()).unwrap();

    assert_eq!(catalogue.resolve("koala").unwrap().width(), 1);
}

#[test]
fn test_catalogue_missing_and_invalid_names() {
    let mut catalogue = ImageCatalogue::new();
    assert!(catalogue.is_empty());
    assert!(matches!(
        catalogue.resolve("nope"),
        Err(EditorError::NotFound(_))
    ));
    assert!(matches!(
        catalogue.remove("nope"),
        Err(EditorError::NotFound(_))
    ));
    assert!(matches!(
        catalogue.put("", sample_2x2()),
        Err(EditorError::InvalidName)
    ));
}

#[test]
fn test_catalogue_names_and_remove() {
    let mut catalogue = ImageCatalogue::new();
    catalogue.put("b", sample_2x2()).unwrap();
    catalogue.put("a", sample_2x2()).unwrap();
    assert_eq!(catalogue.names(), vec!["a", "b"]);

    let removed = catalogue.remove("a").unwrap();
    assert_eq!(removed, sample_2x2());
    assert!(!catalogue.contains("a"));
    assert!(catalogue.contains("b"));
}
