mod utils;

use std::io::Cursor;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use egret_tiff::error::Error;
use egret_tiff::{Options, Tiff, Value};
use utils::{CountingReader, TiffBuilder};

/// Root IFD at 8 pointing to an EXIF IFD at 60 and a GPS IFD at 86.
/// The GPS directory starts with GPSVersionID, whose tag id is 0.
fn nested_data() -> Vec<u8> {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(3)
        // Model, 10 bytes at offset 50
        .entry_u32(0x110, 2, 10, 50)
        // Exif_IFD pointer
        .entry_u32(0x8769, 4, 1, 60)
        // GPSInfo pointer
        .entry_u32(0x8825, 4, 1, 86)
        .u32(0)
        .bytes(b"NIKON D90\0")
        // EXIF IFD: FNumber 28/10 at offset 78
        .u16(1)
        .entry_u32(0x829D, 5, 1, 78)
        .u32(0)
        .u32(28)
        .u32(10)
        // GPS IFD
        .u16(2)
        .entry(0, 1, 4, [2, 3, 0, 0])
        .entry(1, 2, 2, [b'N', 0, 0, 0])
        .u32(0);
    builder.build()
}

#[test]
fn pointer_tags_reach_nested_directories() {
    let tiff = Tiff::from_vec(nested_data()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(root.text("Model"), Some("NIKON D90"));
    assert_eq!(root.uint("Exif_IFD"), Some(60));

    let exif = tiff.exif_directory(&root).unwrap().unwrap();
    assert_eq!(exif.offset(), 60);
    assert_eq!(exif.float("FNumber"), Some(2.8));

    assert!(tiff.interoperability_directory(&root).unwrap().is_none());
}

#[test]
fn zero_tag_id_is_dropped_without_rescanning() {
    let tiff = Tiff::from_vec(nested_data()).unwrap();
    let root = tiff.root_directory().unwrap();

    let gps = tiff.gps_directory(&root).unwrap().unwrap();
    assert_eq!(gps.declared_entries(), 2);
    // GPSVersionID carries tag id 0 and is treated as padding by default;
    // the following entry still decodes at its own slot.
    assert_eq!(gps.len(), 1);
    assert_eq!(gps.text("GPSLatitudeRef"), Some("N"));
}

#[test]
fn zero_tag_shim_accepts_first_entry_at_configured_offset() {
    let tiff = Tiff::from_vec_with(
        nested_data(),
        Options::new().zero_tag_offset(Some(86)),
    )
    .unwrap();
    let root = tiff.root_directory().unwrap();

    let gps = tiff.gps_directory(&root).unwrap().unwrap();
    assert_eq!(gps.len(), 2);
    assert_eq!(
        gps.get("GPSVersionID"),
        Some(&Value::List(vec![
            Value::UInt(2),
            Value::UInt(3),
            Value::UInt(0),
            Value::UInt(0),
        ]))
    );
}

#[test]
fn sub_ifds_decode_individually() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(1)
        // SubIFDs: two offsets stored at 26
        .entry_u32(0x14A, 4, 2, 26)
        .u32(0)
        .u32(34)
        .u32(52)
        // First sub-IFD
        .u16(1)
        .entry_u32(0x100, 4, 1, 160)
        .u32(0)
        // Second sub-IFD
        .u16(1)
        .entry_u32(0x100, 4, 1, 320)
        .u32(0);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(
        root.get("SubIFDs"),
        Some(&Value::List(vec![Value::UInt(34), Value::UInt(52)]))
    );

    let subs = tiff.sub_ifds(&root).unwrap();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].uint("ImageWidth"), Some(160));
    assert_eq!(subs[1].uint("ImageWidth"), Some(320));
}

#[test]
fn directories_are_cached_by_offset() {
    let (reader, reads) = CountingReader::new(Cursor::new(nested_data()));
    let tiff = Tiff::from_reader(reader, Options::default()).unwrap();

    let first = tiff.root_directory().unwrap();
    let after_first = reads.load(Ordering::SeqCst);

    let second = tiff.root_directory().unwrap();
    let third = tiff.directory_at(8).unwrap();
    assert_eq!(reads.load(Ordering::SeqCst), after_first);

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
}

#[test]
fn unknown_type_code_drops_only_its_entry() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(2)
        .entry_u32(0x100, 99, 1, 160)
        .entry_u32(0x101, 4, 1, 120)
        .u32(0);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(root.declared_entries(), 2);
    assert_eq!(root.len(), 1);
    assert_eq!(root.get("ImageWidth"), None);
    assert_eq!(root.uint("ImageLength"), Some(120));
}

#[test]
fn truncated_value_drops_only_its_entry() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(2)
        // Ten LONGs allegedly stored far past the end of the stream
        .entry_u32(0x111, 4, 10, 9999)
        .entry_u32(0x101, 4, 1, 120)
        .u32(0);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(root.len(), 1);
    assert_eq!(root.uint("ImageLength"), Some(120));
}

#[test]
fn truncated_entry_count_is_structural() {
    let tiff = Tiff::from_vec(TiffBuilder::le(5000).build()).unwrap();
    let err = tiff.root_directory().unwrap_err();
    assert!(matches!(err, Error::TruncatedRead));
}

#[test]
fn nameless_tag_ids_are_silently_dropped() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(2)
        .entry_u32(0xFFF0, 4, 1, 1)
        .entry_u32(0x101, 4, 1, 120)
        .u32(0);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(root.declared_entries(), 2);
    assert_eq!(root.len(), 1);
}

#[test]
fn next_ifd_offset_is_exposed_but_not_followed() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(1)
        .entry_u32(0x100, 4, 1, 160)
        // Chain to a second IFD at 26
        .u32(26)
        .u16(1)
        .entry_u32(0x101, 4, 1, 120)
        .u32(0);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(root.next_ifd_offset(), Some(26));

    let next = tiff.directory_at(26).unwrap();
    assert_eq!(next.uint("ImageLength"), Some(120));
    assert_eq!(next.next_ifd_offset(), None);
}
