use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{ImageFormat, Rgb, RgbImage};

use nimbus_core::client::ImageEntry;
use nimbus_core::decode::decode_series;
use nimbus_core::error::NimbusError;

fn jpeg_bytes(gray: u8) -> Vec<u8> {
    let img = RgbImage::from_pixel(8, 8, Rgb([gray, gray, gray]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .unwrap();
    bytes
}

fn entry(base64: String, hora: &str) -> ImageEntry {
    ImageEntry {
        nome: format!("frame-{hora}"),
        satelite: "GOES".into(),
        parametro: "IV".into(),
        data: "2024-05-04".into(),
        hora: hora.into(),
        base64,
    }
}

fn jpeg_entry(gray: u8, hora: &str) -> ImageEntry {
    let payload = format!("data:image/jpg;base64,{}", BASE64.encode(jpeg_bytes(gray)));
    entry(payload, hora)
}

#[test]
fn test_series_is_reversed_to_chronological_order() {
    // Catalog order: newest (bright) first.
    let entries = vec![
        jpeg_entry(250, "14:00"),
        jpeg_entry(128, "13:00"),
        jpeg_entry(5, "12:00"),
    ];

    let frames = decode_series(&entries).unwrap();
    assert_eq!(frames.len(), 3);

    // Oldest (dark) first after decoding. JPEG is lossy, so compare
    // brightness ordering rather than exact values.
    let brightness: Vec<u8> = frames.iter().map(|f| f.get_pixel(0, 0).0[0]).collect();
    assert!(brightness[0] < brightness[1]);
    assert!(brightness[1] < brightness[2]);
}

#[test]
fn test_empty_series() {
    let frames = decode_series(&[]).unwrap();
    assert!(frames.is_empty());
}

#[test]
fn test_unexpected_mime_tag_names_the_tag() {
    let payload = format!("data:image/png;base64,{}", BASE64.encode(jpeg_bytes(10)));
    let entries = vec![entry(payload, "12:00")];

    match decode_series(&entries) {
        Err(NimbusError::UnexpectedMime(tag)) => assert_eq!(tag, "data:image/png"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_missing_base64_marker() {
    let entries = vec![entry("data:image/jpg,plainbody".into(), "12:00")];
    assert!(matches!(
        decode_series(&entries),
        Err(NimbusError::MalformedDataUri)
    ));
}

#[test]
fn test_invalid_base64_body() {
    let entries = vec![entry("data:image/jpg;base64,!!not-base64!!".into(), "12:00")];
    assert!(matches!(
        decode_series(&entries),
        Err(NimbusError::Base64(_))
    ));
}

#[test]
fn test_truncated_jpeg_payload() {
    let mut bytes = jpeg_bytes(100);
    bytes.truncate(4);
    let payload = format!("data:image/jpg;base64,{}", BASE64.encode(bytes));
    let entries = vec![entry(payload, "12:00")];
    assert!(matches!(
        decode_series(&entries),
        Err(NimbusError::Image(_))
    ));
}

#[test]
fn test_one_bad_entry_fails_the_whole_series() {
    let entries = vec![
        jpeg_entry(200, "14:00"),
        entry("data:image/jpg;base64,???".into(), "13:00"),
        jpeg_entry(10, "12:00"),
    ];
    assert!(decode_series(&entries).is_err());
}
