//! Tags of the attributes the header decoder knows by name.
//!
//! Besides the file meta group and the attributes with a tag handler,
//! a few identifying attributes are listed
//! so that implicit VR data sets still get a proper VR for them.

use dcmhead_core::dictionary::DictionaryEntry;
use dcmhead_core::header::{Tag, VR};

macro_rules! attributes {
    ($($name:ident ($group:literal, $element:literal) $vr:ident $alias:literal,)+) => {
        $(
            #[doc = concat!("`", $alias, "`, ", stringify!($vr))]
            pub const $name: Tag = Tag($group, $element);
        )+

        /// Every attribute above.
        pub(crate) const ENTRIES: &[DictionaryEntry] = &[
            $(DictionaryEntry { tag: $name, alias: $alias, vr: VR::$vr },)+
        ];
    };
}

attributes! {
    // file meta information
    FILE_META_INFORMATION_GROUP_LENGTH (0x0002, 0x0000) UL "FileMetaInformationGroupLength",
    FILE_META_INFORMATION_VERSION (0x0002, 0x0001) OB "FileMetaInformationVersion",
    MEDIA_STORAGE_SOP_CLASS_UID (0x0002, 0x0002) UI "MediaStorageSOPClassUID",
    MEDIA_STORAGE_SOP_INSTANCE_UID (0x0002, 0x0003) UI "MediaStorageSOPInstanceUID",
    TRANSFER_SYNTAX_UID (0x0002, 0x0010) UI "TransferSyntaxUID",
    IMPLEMENTATION_CLASS_UID (0x0002, 0x0012) UI "ImplementationClassUID",
    IMPLEMENTATION_VERSION_NAME (0x0002, 0x0013) SH "ImplementationVersionName",

    // identification
    SPECIFIC_CHARACTER_SET (0x0008, 0x0005) CS "SpecificCharacterSet",
    IMAGE_TYPE (0x0008, 0x0008) CS "ImageType",
    SOP_CLASS_UID (0x0008, 0x0016) UI "SOPClassUID",
    SOP_INSTANCE_UID (0x0008, 0x0018) UI "SOPInstanceUID",
    STUDY_DATE (0x0008, 0x0020) DA "StudyDate",
    MODALITY (0x0008, 0x0060) CS "Modality",
    MANUFACTURER (0x0008, 0x0070) LO "Manufacturer",
    SERIES_DESCRIPTION (0x0008, 0x103E) LO "SeriesDescription",
    REFERENCED_IMAGE_SEQUENCE (0x0008, 0x1140) SQ "ReferencedImageSequence",
    PATIENT_NAME (0x0010, 0x0010) PN "PatientName",
    PATIENT_ID (0x0010, 0x0020) LO "PatientID",
    STUDY_INSTANCE_UID (0x0020, 0x000D) UI "StudyInstanceUID",
    SERIES_INSTANCE_UID (0x0020, 0x000E) UI "SeriesInstanceUID",
    INSTANCE_NUMBER (0x0020, 0x0013) IS "InstanceNumber",

    // geometry
    SLICE_THICKNESS (0x0018, 0x0050) DS "SliceThickness",
    SPACING_BETWEEN_SLICES (0x0018, 0x0088) DS "SpacingBetweenSlices",
    IMAGE_POSITION_PATIENT (0x0020, 0x0032) DS "ImagePositionPatient",
    IMAGE_ORIENTATION_PATIENT (0x0020, 0x0037) DS "ImageOrientationPatient",
    SLICE_LOCATION (0x0020, 0x1041) DS "SliceLocation",

    // image pixel description
    SAMPLES_PER_PIXEL (0x0028, 0x0002) US "SamplesPerPixel",
    PHOTOMETRIC_INTERPRETATION (0x0028, 0x0004) CS "PhotometricInterpretation",
    PLANAR_CONFIGURATION (0x0028, 0x0006) US "PlanarConfiguration",
    NUMBER_OF_FRAMES (0x0028, 0x0008) IS "NumberOfFrames",
    ROWS (0x0028, 0x0010) US "Rows",
    COLUMNS (0x0028, 0x0011) US "Columns",
    PIXEL_SPACING (0x0028, 0x0030) DS "PixelSpacing",
    BITS_ALLOCATED (0x0028, 0x0100) US "BitsAllocated",
    BITS_STORED (0x0028, 0x0101) US "BitsStored",
    HIGH_BIT (0x0028, 0x0102) US "HighBit",
    PIXEL_REPRESENTATION (0x0028, 0x0103) US "PixelRepresentation",

    // value transformations
    WINDOW_CENTER (0x0028, 0x1050) DS "WindowCenter",
    WINDOW_WIDTH (0x0028, 0x1051) DS "WindowWidth",
    RESCALE_INTERCEPT (0x0028, 0x1052) DS "RescaleIntercept",
    RESCALE_SLOPE (0x0028, 0x1053) DS "RescaleSlope",
    RESCALE_TYPE (0x0028, 0x1054) LO "RescaleType",

    // palette color
    RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR (0x0028, 0x1101) US "RedPaletteColorLookupTableDescriptor",
    GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR (0x0028, 0x1102) US "GreenPaletteColorLookupTableDescriptor",
    BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR (0x0028, 0x1103) US "BluePaletteColorLookupTableDescriptor",
    RED_PALETTE_COLOR_LOOKUP_TABLE_DATA (0x0028, 0x1201) OW "RedPaletteColorLookupTableData",
    GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA (0x0028, 0x1202) OW "GreenPaletteColorLookupTableData",
    BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA (0x0028, 0x1203) OW "BluePaletteColorLookupTableData",

    ICON_IMAGE_SEQUENCE (0x0088, 0x0200) SQ "IconImageSequence",
    PIXEL_DATA (0x7FE0, 0x0010) OW "PixelData",
}
