//! Behavior of the standard handlers,
//! exercised through the standard registry.

mod common;

use common::{run_handler, Handled};
use dcmhead_core::{Tag, VR};
use dcmhead_dictionary_std::tags;
use dcmhead_parser::{standard_registry, DecodeContext, MetadataTable, SharedHandler};
use std::sync::Arc;
use std::thread;

fn handler(tag: Tag) -> &'static SharedHandler {
    standard_registry()
        .get_handler(tag)
        .unwrap_or_else(|| panic!("no handler for {}", tag))
}

/// Run the standard handler of `tag` on a fresh context.
fn run(tag: Tag, vr: VR, value: &[u8]) -> (Handled, DecodeContext, MetadataTable) {
    let mut ctx = DecodeContext::new();
    let mut metadata = MetadataTable::new();
    let out = run_handler(handler(tag).as_ref(), tag, vr, value, &mut ctx, &mut metadata);
    (out, ctx, metadata)
}

fn text(values: &[&'static str]) -> Vec<&'static [u8]> {
    values.iter().map(|v| v.as_bytes()).collect()
}

/// Valid and invalid values for every registered tag but Pixel Data.
fn samples() -> Vec<(Tag, VR, Vec<&'static [u8]>)> {
    let us: Vec<&'static [u8]> = vec![&[0x00, 0x02], &[0x01], &[0x00, 0x02, 0x00, 0x03], &[]];
    let lut: Vec<&'static [u8]> = vec![&[0x00, 0x10, 0x00, 0x20], &[0x01, 0x02, 0x03], &[]];
    let decimal = text(&["-1024 ", "2.5", "abc ", "1\\2", ""]);
    vec![
        (
            tags::TRANSFER_SYNTAX_UID,
            VR::UI,
            text(&["1.2.840.10008.1.2.1\0", "1.2.840.10008.1.2.4.50", "9.9.9 ", ""]),
        ),
        (tags::ROWS, VR::US, us.clone()),
        (tags::COLUMNS, VR::US, us.clone()),
        (tags::BITS_ALLOCATED, VR::US, us.clone()),
        (tags::SAMPLES_PER_PIXEL, VR::US, us.clone()),
        (tags::PLANAR_CONFIGURATION, VR::US, us.clone()),
        (tags::PIXEL_REPRESENTATION, VR::US, us),
        (
            tags::PHOTOMETRIC_INTERPRETATION,
            VR::CS,
            text(&["MONOCHROME2 ", "PALETTE COLOR", ""]),
        ),
        (tags::WINDOW_CENTER, VR::DS, text(&["40\\80 ", "40", "abc ", ""])),
        (tags::WINDOW_WIDTH, VR::DS, text(&["400 ", "\\", "x"])),
        (
            tags::IMAGE_ORIENTATION_PATIENT,
            VR::DS,
            text(&["1\\0\\0\\0\\1\\0 ", "1\\0", "0\\0\\0\\0\\0\\0 ", "x", ""]),
        ),
        (
            tags::IMAGE_POSITION_PATIENT,
            VR::DS,
            text(&["-10\\5.5\\3 ", "1", "a\\b\\c ", ""]),
        ),
        (
            tags::PIXEL_SPACING,
            VR::DS,
            text(&["0.3\\0.4 ", "invalid ", "1\\2\\3 ", ""]),
        ),
        (tags::SLICE_THICKNESS, VR::DS, decimal.clone()),
        (tags::SPACING_BETWEEN_SLICES, VR::DS, decimal.clone()),
        (tags::RESCALE_INTERCEPT, VR::DS, decimal.clone()),
        (tags::RESCALE_SLOPE, VR::DS, decimal),
        (tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, VR::OW, lut.clone()),
        (tags::GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, VR::OW, lut.clone()),
        (tags::BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, VR::OW, lut),
        (tags::MODALITY, VR::CS, text(&["CT", "MR ", ""])),
        (tags::NUMBER_OF_FRAMES, VR::IS, text(&["24", "0.5 ", "1 ", "x ", ""])),
    ]
}

#[test]
fn registry_lookups_are_stable_across_threads() {
    let sampled_tags = [
        tags::TRANSFER_SYNTAX_UID,
        tags::ROWS,
        tags::WINDOW_CENTER,
        tags::RESCALE_SLOPE,
        tags::PIXEL_DATA,
    ];
    let addresses = |tag: Tag| Arc::as_ptr(handler(tag)) as *const () as usize;
    let expected: Vec<usize> = sampled_tags.iter().map(|tag| addresses(*tag)).collect();
    // repeated calls on the same thread
    let again: Vec<usize> = sampled_tags.iter().map(|tag| addresses(*tag)).collect();
    assert_eq!(expected, again);

    let workers: Vec<_> = (0..4)
        .map(|_| thread::spawn(move || sampled_tags.iter().map(|tag| addresses(*tag)).collect::<Vec<_>>()))
        .collect();
    for worker in workers {
        assert_eq!(worker.join().unwrap(), expected);
    }
}

#[test]
fn handlers_consume_exactly_the_element_value() {
    for (tag, vr, values) in samples() {
        for value in values {
            let (out, _, _) = run(tag, vr, value);
            assert_eq!(
                out.position,
                value.len() as u64,
                "{} with value {:?} did not stop at the end of the value",
                tag,
                value
            );
            assert!(
                out.requested <= value.len() as u64,
                "{} with value {:?} asked for {} bytes",
                tag,
                value,
                out.requested
            );
        }
    }
}

#[test]
fn only_pixel_data_stops_decoding() {
    for (tag, vr, values) in samples() {
        for value in values {
            let (out, ctx, _) = run(tag, vr, value);
            assert!(out.proceed, "{} with value {:?} stopped decoding", tag, value);
            assert!(!ctx.stop);
        }
    }

    let (out, ctx, metadata) = run(tags::PIXEL_DATA, VR::OW, &[0; 16]);
    assert!(!out.proceed);
    assert!(ctx.stop);
    // pixel data is located, never read
    assert_eq!(out.position, 0);
    assert_eq!(out.requested, 0);
    assert_eq!(metadata.int_info(tags::PIXEL_DATA), Some(0));
}

#[test]
fn windowing_prefers_the_second_value() {
    let (_, ctx, _) = run(tags::WINDOW_CENTER, VR::DS, b"40\\80");
    assert_eq!(ctx.window_center, 80.);
    let (_, ctx, _) = run(tags::WINDOW_CENTER, VR::DS, b"40");
    assert_eq!(ctx.window_center, 40.);
    let (_, ctx, _) = run(tags::WINDOW_CENTER, VR::DS, b"abc ");
    assert_eq!(ctx.window_center, 0.);
    // everything after the first separator is read as one number
    let (_, ctx, _) = run(tags::WINDOW_WIDTH, VR::DS, b"400\\1500\\80 ");
    assert_eq!(ctx.window_width, 0.);
}

#[test]
fn rescale_defaults() {
    let (_, ctx, _) = run(tags::RESCALE_INTERCEPT, VR::DS, b"-1024 ");
    assert_eq!(ctx.rescale_intercept, -1024.);
    let (_, ctx, _) = run(tags::RESCALE_SLOPE, VR::DS, b"1 ");
    assert_eq!(ctx.rescale_slope, 1.);

    let (_, ctx, _) = run(tags::RESCALE_INTERCEPT, VR::DS, b"n/a ");
    assert_eq!(ctx.rescale_intercept, 0.);
    let (_, ctx, _) = run(tags::RESCALE_SLOPE, VR::DS, b"n/a ");
    assert_eq!(ctx.rescale_slope, 1.);
}

#[test]
fn orientation_vectors_are_normalized() {
    let (_, ctx, _) = run(tags::IMAGE_ORIENTATION_PATIENT, VR::DS, b"2\\0\\0\\0\\2\\0 ");
    let orientation = ctx.orientation.expect("orientation should be set");
    for v in [orientation.row, orientation.column].iter() {
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((norm - 1.).abs() < 1e-9);
    }
    assert!((orientation.row[0] - 1.).abs() < 1e-9);
    assert!((orientation.column[1] - 1.).abs() < 1e-9);

    let (_, ctx, _) = run(tags::IMAGE_ORIENTATION_PATIENT, VR::DS, b"1\\0\\0\\x\\1\\0\\0 ");
    assert!(ctx.orientation.is_none());
}

#[test]
fn pixel_spacing_maps_rows_to_height() {
    let (_, ctx, _) = run(tags::PIXEL_SPACING, VR::DS, b"0.3\\0.4 ");
    assert_eq!(ctx.pixel_height, 0.3);
    assert_eq!(ctx.pixel_width, 0.4);

    let (_, ctx, _) = run(tags::PIXEL_SPACING, VR::DS, b"invalid ");
    assert_eq!(ctx.pixel_height, 1.);
    assert_eq!(ctx.pixel_width, 1.);
}

#[test]
fn frame_count_only_grows_past_one() {
    let (_, ctx, _) = run(tags::NUMBER_OF_FRAMES, VR::IS, b"1 ");
    assert_eq!(ctx.frame_count, 1);
    let (_, ctx, _) = run(tags::NUMBER_OF_FRAMES, VR::IS, b"0.5 ");
    assert_eq!(ctx.frame_count, 1);
    let (_, ctx, _) = run(tags::NUMBER_OF_FRAMES, VR::IS, b"24");
    assert_eq!(ctx.frame_count, 24);
}

#[test]
fn broken_palette_channel_does_not_affect_others() {
    let mut ctx = DecodeContext::new();
    let mut metadata = MetadataTable::new();
    let red = tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA;
    let green = tags::GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA;

    let out = run_handler(
        handler(red).as_ref(),
        red,
        VR::OW,
        &[0x00, 0xFF, 0x7F],
        &mut ctx,
        &mut metadata,
    );
    assert!(out.proceed);
    let out = run_handler(
        handler(green).as_ref(),
        green,
        VR::OW,
        &[0x00, 0x00, 0x00, 0x80, 0xFF, 0xFF],
        &mut ctx,
        &mut metadata,
    );
    assert!(out.proceed);

    assert_eq!(ctx.red_palette, None);
    assert_eq!(ctx.green_palette, Some(vec![0x00, 0x80, 0xFF]));
    assert!(!ctx.has_palette());
}

#[test]
fn untouched_context_describes_a_valid_image() {
    let ctx = DecodeContext::new();
    assert_eq!(ctx.width, 1);
    assert_eq!(ctx.height, 1);
    assert_eq!(ctx.bit_depth, 16);
    assert_eq!(ctx.rescale_slope, 1.);
    assert_eq!(ctx.rescale_intercept, 0.);
    assert_eq!(ctx.pixel_width, 1.);
    assert_eq!(ctx.pixel_height, 1.);
    assert_eq!(ctx.pixel_depth, 1.);
    assert!(!ctx.stop);
    assert!(!ctx.compressed);
    assert!(!ctx.big_endian);
}
