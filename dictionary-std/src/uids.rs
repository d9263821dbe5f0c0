//! Transfer syntax UIDs.
//!
//! Other UIDs, such as SOP classes, play no part in reading a header
//! and are passed through as text.

macro_rules! transfer_syntax_uids {
    ($($name:ident = $uid:literal $title:literal,)+) => {
        $(
            #[doc = $title]
            pub const $name: &str = $uid;
        )+
    };
}

transfer_syntax_uids! {
    IMPLICIT_VR_LITTLE_ENDIAN = "1.2.840.10008.1.2" "Implicit VR Little Endian, the default",
    EXPLICIT_VR_LITTLE_ENDIAN = "1.2.840.10008.1.2.1" "Explicit VR Little Endian",
    ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN = "1.2.840.10008.1.2.1.98"
        "Encapsulated Uncompressed Explicit VR Little Endian",
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN = "1.2.840.10008.1.2.1.99" "Deflated Explicit VR Little Endian",
    EXPLICIT_VR_BIG_ENDIAN = "1.2.840.10008.1.2.2" "Explicit VR Big Endian (retired)",
    JPEG_BASELINE8_BIT = "1.2.840.10008.1.2.4.50" "JPEG Baseline, 8 bit",
    JPEG_EXTENDED12_BIT = "1.2.840.10008.1.2.4.51" "JPEG Extended, 12 bit",
    JPEG_LOSSLESS = "1.2.840.10008.1.2.4.57" "JPEG Lossless, process 14",
    JPEG_LOSSLESS_SV1 = "1.2.840.10008.1.2.4.70" "JPEG Lossless, process 14, selection value 1",
    JPEGLS_LOSSLESS = "1.2.840.10008.1.2.4.80" "JPEG-LS Lossless",
    JPEGLS_NEAR_LOSSLESS = "1.2.840.10008.1.2.4.81" "JPEG-LS Near-Lossless",
    JPEG2000_LOSSLESS = "1.2.840.10008.1.2.4.90" "JPEG 2000, lossless only",
    JPEG2000 = "1.2.840.10008.1.2.4.91" "JPEG 2000",
    JPEG2000MC_LOSSLESS = "1.2.840.10008.1.2.4.92" "JPEG 2000 Part 2 multi-component, lossless only",
    JPEG2000MC = "1.2.840.10008.1.2.4.93" "JPEG 2000 Part 2 multi-component",
    JPIP_REFERENCED = "1.2.840.10008.1.2.4.94" "JPIP Referenced",
    JPIP_REFERENCED_DEFLATE = "1.2.840.10008.1.2.4.95" "JPIP Referenced Deflate",
    MPEG2MPML = "1.2.840.10008.1.2.4.100" "MPEG2 Main Profile, Main Level",
    MPEG2MPHL = "1.2.840.10008.1.2.4.101" "MPEG2 Main Profile, High Level",
    MPEG4HP41 = "1.2.840.10008.1.2.4.102" "MPEG-4 AVC/H.264 High Profile, Level 4.1",
    MPEG4HP41BD = "1.2.840.10008.1.2.4.103" "MPEG-4 AVC/H.264 BD-compatible High Profile, Level 4.1",
    MPEG4HP422D = "1.2.840.10008.1.2.4.104" "MPEG-4 AVC/H.264 High Profile, Level 4.2, 2D video",
    MPEG4HP423D = "1.2.840.10008.1.2.4.105" "MPEG-4 AVC/H.264 High Profile, Level 4.2, 3D video",
    MPEG4HP42STEREO = "1.2.840.10008.1.2.4.106" "MPEG-4 AVC/H.264 Stereo High Profile, Level 4.2",
    HEVCMP51 = "1.2.840.10008.1.2.4.107" "HEVC/H.265 Main Profile, Level 5.1",
    HEVCM10P51 = "1.2.840.10008.1.2.4.108" "HEVC/H.265 Main 10 Profile, Level 5.1",
    RLE_LOSSLESS = "1.2.840.10008.1.2.5" "RLE Lossless",
}
