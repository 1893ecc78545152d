mod utils;

use std::io::Cursor;

use egret_tiff::internal::{TiffRaw, ValueOffset};
use egret_tiff::{Options, Tiff, Value};
use utils::TiffBuilder;

#[test]
fn rational_pair_sequence() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(1)
        // XResolution, two rationals at offset 26
        .entry_u32(0x11A, 5, 2, 26)
        .u32(0)
        .u32(1)
        .u32(2)
        .u32(3)
        .u32(4);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(
        root.get("XResolution"),
        Some(&Value::List(vec![Value::Float(0.5), Value::Float(0.75)]))
    );
}

#[test]
fn zero_denominator_is_undefined_not_a_fault() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(1)
        .entry_u32(0x11A, 5, 1, 26)
        .u32(0)
        .u32(1)
        .u32(0);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    let value = root.float("XResolution").unwrap();
    assert!(value.is_nan());
}

#[test]
fn signed_rational() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(1)
        // ExposureBiasValue, -1/2
        .entry_u32(0x9204, 10, 1, 26)
        .u32(0)
        .bytes(&(-1_i32).to_le_bytes())
        .u32(2);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(root.float("ExposureBiasValue"), Some(-0.5));
}

#[test]
fn inline_short_pair() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(1)
        // ISOSpeedRatings, two SHORTs packed into the slot: 400, 100
        .entry(0x8827, 3, 2, [0x90, 0x01, 0x64, 0x00])
        .u32(0);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(
        root.get("ISOSpeedRatings"),
        Some(&Value::List(vec![Value::UInt(400), Value::UInt(100)]))
    );
}

#[test]
fn inline_ascii_strips_padding() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(1)
        .entry(0x131, 2, 4, *b"ab\0\0")
        .u32(0);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(root.text("Software"), Some("ab"));
}

#[test]
fn signed_short_inline() {
    let mut builder = TiffBuilder::le(8);
    builder.u16(1);
    let mut slot = [0; 4];
    slot[..2].copy_from_slice(&(-60_i16).to_le_bytes());
    builder.entry(0x886A, 8, 1, slot).u32(0);

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(root.get("TimeZoneOffset"), Some(&Value::Int(-60)));
}

#[test]
fn float_inline_and_double_indirect() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(2)
        .entry(0xC62A, 11, 1, 2.5_f32.to_le_bytes())
        .entry_u32(0xC62B, 12, 1, 38)
        .u32(0)
        .bytes(&1.5_f64.to_le_bytes());

    let tiff = Tiff::from_vec(builder.build()).unwrap();
    let root = tiff.root_directory().unwrap();

    assert_eq!(root.get("BaselineExposure"), Some(&Value::Float(2.5)));
    assert_eq!(root.get("BaselineNoise"), Some(&Value::Float(1.5)));
}

#[test]
fn inline_value_leaves_cursor_past_entry() {
    let mut builder = TiffBuilder::le(8);
    builder.u16(1).entry_u32(0x112, 3, 1, 7).u32(0);

    let mut decoder = TiffRaw::new(Cursor::new(builder.build()), Options::default());
    decoder.decode_header().unwrap();

    decoder.raw.seek_start(10).unwrap();
    let (_, entry) = decoder.read_entry(10).unwrap();
    assert_eq!(entry.value_offset, ValueOffset::Value(7));

    let value = decoder.decode_value(&entry).unwrap();
    assert_eq!(value, Value::UInt(7));
    // Entry record is 12 bytes; no indirection happened.
    assert_eq!(decoder.raw.position().unwrap(), 22);
}

#[test]
fn indirect_value_restores_cursor_past_entry() {
    let mut builder = TiffBuilder::le(8);
    builder
        .u16(1)
        .entry_u32(0x11A, 5, 2, 26)
        .u32(0)
        .u32(1)
        .u32(2)
        .u32(3)
        .u32(4);

    let mut decoder = TiffRaw::new(Cursor::new(builder.build()), Options::default());
    decoder.decode_header().unwrap();

    decoder.raw.seek_start(10).unwrap();
    let (_, entry) = decoder.read_entry(10).unwrap();
    assert_eq!(entry.value_offset, ValueOffset::Offset(26));

    let value = decoder.decode_value(&entry).unwrap();
    assert_eq!(
        value,
        Value::List(vec![Value::Float(0.5), Value::Float(0.75)])
    );
    // The indirect read seeked to 26 and beyond; the cursor still lands
    // just past the 12-byte entry record.
    assert_eq!(decoder.raw.position().unwrap(), 22);
}
