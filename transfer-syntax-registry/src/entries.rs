//! The transfer syntaxes known to the header decoder.
//!
//! Headers of native and encapsulated data sets can be read.
//! Deflated data sets are recognized but not read.

use byteordered::Endianness;
use dcmhead_dictionary_std::uids;
use dcmhead_encoding::transfer_syntax::{Codec, TransferSyntax as Ts};

/// Implicit VR Little Endian, assumed when nothing else is known
pub const IMPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    uids::IMPLICIT_VR_LITTLE_ENDIAN,
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    Codec::None,
);

/// Explicit VR Little Endian, also used for the file meta group
pub const EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    uids::EXPLICIT_VR_LITTLE_ENDIAN,
    "Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::None,
);

/// Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: Ts = Ts::new(
    uids::EXPLICIT_VR_BIG_ENDIAN,
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    Codec::None,
);

const NATIVE: &[Ts] = &[
    IMPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
];

macro_rules! little_endian_explicit {
    ($list:ident, $codec:expr, $($name:ident = $uid:ident $title:literal,)+) => {
        $(
            #[doc = $title]
            pub const $name: Ts = Ts::new(uids::$uid, $title, Endianness::Little, true, $codec);
        )+

        const $list: &[Ts] = &[$($name),+];
    };
}

little_endian_explicit! {
    DEFLATED, Codec::Dataset,
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN = DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN
        "Deflated Explicit VR Little Endian",
    JPIP_REFERENCED_DEFLATE = JPIP_REFERENCED_DEFLATE "JPIP Referenced Deflate",
}

little_endian_explicit! {
    ENCAPSULATED, Codec::EncapsulatedPixelData,
    ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN = ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN
        "Encapsulated Uncompressed Explicit VR Little Endian",
    JPEG_BASELINE = JPEG_BASELINE8_BIT "JPEG Baseline (Process 1)",
    JPEG_EXTENDED = JPEG_EXTENDED12_BIT "JPEG Extended (Process 2 & 4)",
    JPEG_LOSSLESS_NON_HIERARCHICAL = JPEG_LOSSLESS "JPEG Lossless, Non-Hierarchical (Process 14)",
    JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION = JPEG_LOSSLESS_SV1
        "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
    JPEG_LS_LOSSLESS_IMAGE_COMPRESSION = JPEGLS_LOSSLESS "JPEG-LS Lossless Image Compression",
    JPEG_LS_LOSSY_IMAGE_COMPRESSION = JPEGLS_NEAR_LOSSLESS
        "JPEG-LS Lossy (Near-Lossless) Image Compression",
    JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY = JPEG2000_LOSSLESS
        "JPEG 2000 Image Compression (Lossless Only)",
    JPEG_2000_IMAGE_COMPRESSION = JPEG2000 "JPEG 2000 Image Compression",
    JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION_LOSSLESS_ONLY = JPEG2000MC_LOSSLESS
        "JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)",
    JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION = JPEG2000MC
        "JPEG 2000 Part 2 Multi-component Image Compression",
    JPIP_REFERENCED = JPIP_REFERENCED "JPIP Referenced",
    MPEG2_MAIN_PROFILE_MAIN_LEVEL = MPEG2MPML "MPEG2 Main Profile / Main Level",
    MPEG2_MAIN_PROFILE_HIGH_LEVEL = MPEG2MPHL "MPEG2 Main Profile / High Level",
    MPEG4_AVC_H264_HIGH_PROFILE = MPEG4HP41 "MPEG-4 AVC/H.264 High Profile / Level 4.1",
    MPEG4_AVC_H264_BD_COMPATIBLE_HIGH_PROFILE = MPEG4HP41BD
        "MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1",
    MPEG4_AVC_H264_HIGH_PROFILE_FOR_2D_VIDEO = MPEG4HP422D
        "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video",
    MPEG4_AVC_H264_HIGH_PROFILE_FOR_3D_VIDEO = MPEG4HP423D
        "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video",
    MPEG4_AVC_H264_STEREO_HIGH_PROFILE = MPEG4HP42STEREO
        "MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2",
    HEVC_H265_MAIN_PROFILE = HEVCMP51 "HEVC/H.265 Main Profile / Level 5.1",
    HEVC_H265_MAIN_10_PROFILE = HEVCM10P51 "HEVC/H.265 Main 10 Profile / Level 5.1",
    RLE_LOSSLESS = RLE_LOSSLESS "RLE Lossless",
}

/// Every known transfer syntax: native, then deflated, then encapsulated.
pub(crate) fn all() -> impl Iterator<Item = &'static Ts> {
    NATIVE.iter().chain(DEFLATED).chain(ENCAPSULATED)
}
