//! The mutable state shared by the tag handlers of a single decode.

/// Row and column direction cosines of the first row and first column
/// of an image, relative to the patient.
///
/// Both vectors are of unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orientation {
    /// Direction of the first row (increasing column index).
    pub row: [f64; 3],
    /// Direction of the first column (increasing row index).
    pub column: [f64; 3],
}

impl Orientation {
    /// Build an orientation from two direction vectors,
    /// normalizing each of them.
    ///
    /// Returns `None` if either vector has zero (or non-finite) length.
    pub fn from_directions(row: [f64; 3], column: [f64; 3]) -> Option<Self> {
        Some(Orientation {
            row: normalize(row)?,
            column: normalize(column)?,
        })
    }

    /// The normal of the image plane
    /// (cross product of the row and column directions).
    pub fn normal(&self) -> [f64; 3] {
        let [a1, a2, a3] = self.row;
        let [b1, b2, b3] = self.column;
        [a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1]
    }
}

fn normalize(v: [f64; 3]) -> Option<[f64; 3]> {
    let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if norm == 0. || !norm.is_finite() {
        return None;
    }
    Some([v[0] / norm, v[1] / norm, v[2] / norm])
}

/// Everything the header decoder learns about the image.
///
/// A new context describes a valid 1×1 image
/// with 16 bits per sample, native little endian pixel data
/// and an identity modality transform.
/// Tag handlers refine it as the header is read.
///
/// A context belongs to one decode and is not meant to be reused
/// for another file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeContext {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Bits allocated for each sample.
    pub bit_depth: u32,

    /// Transfer syntax UID, as declared in the file.
    pub transfer_syntax_uid: String,
    /// Whether the pixel data is encapsulated in a compressed form.
    pub compressed: bool,
    /// Whether multi-byte values are in big endian.
    pub big_endian: bool,

    /// Samples per pixel.
    pub samples_per_pixel: u16,
    /// Photometric interpretation, as declared in the file.
    pub photometric_interpretation: String,
    /// Pixel representation: 0 for unsigned, 1 for two's complement.
    pub pixel_representation: u16,
    /// Planar configuration: 0 for interleaved samples, 1 for separate planes.
    pub planar_configuration: u16,

    /// Default window center.
    pub window_center: f64,
    /// Default window width.
    pub window_width: f64,

    /// Physical distance between the centers of adjacent columns, in mm.
    pub pixel_width: f64,
    /// Physical distance between the centers of adjacent rows, in mm.
    pub pixel_height: f64,
    /// Slice thickness or spacing between slices, in mm.
    pub pixel_depth: f64,

    /// Image orientation relative to the patient, if known.
    pub orientation: Option<Orientation>,
    /// Position of the top left voxel in the patient coordinate system, if known.
    pub position: Option<[f64; 3]>,

    /// Rescale intercept of the modality transform.
    pub rescale_intercept: f64,
    /// Rescale slope of the modality transform.
    pub rescale_slope: f64,

    /// Red channel of the palette color lookup table.
    pub red_palette: Option<Vec<u8>>,
    /// Green channel of the palette color lookup table.
    pub green_palette: Option<Vec<u8>>,
    /// Blue channel of the palette color lookup table.
    pub blue_palette: Option<Vec<u8>>,

    /// Byte offset of the pixel data value in the stream.
    pub pixel_data_offset: u64,
    /// Number of frames in the pixel data.
    pub frame_count: u32,
    /// Modality of the acquisition, as declared in the file.
    pub modality: Option<String>,

    /// Whether decoding should stop.
    pub stop: bool,
}

impl Default for DecodeContext {
    fn default() -> Self {
        DecodeContext {
            width: 1,
            height: 1,
            bit_depth: 16,
            transfer_syntax_uid: String::new(),
            compressed: false,
            big_endian: false,
            samples_per_pixel: 1,
            photometric_interpretation: String::new(),
            pixel_representation: 0,
            planar_configuration: 0,
            window_center: 0.,
            window_width: 0.,
            pixel_width: 1.,
            pixel_height: 1.,
            pixel_depth: 1.,
            orientation: None,
            position: None,
            rescale_intercept: 0.,
            rescale_slope: 1.,
            red_palette: None,
            green_palette: None,
            blue_palette: None,
            pixel_data_offset: 0,
            frame_count: 1,
            modality: None,
            stop: false,
        }
    }
}

impl DecodeContext {
    /// Create a fresh context with all defaults in place.
    pub fn new() -> Self {
        DecodeContext::default()
    }

    /// Whether pixel samples are signed.
    pub fn is_signed(&self) -> bool {
        self.pixel_representation == 1
    }

    /// Whether all three palette channels are available.
    pub fn has_palette(&self) -> bool {
        self.red_palette.is_some() && self.green_palette.is_some() && self.blue_palette.is_some()
    }

    /// Whether both orientation and position are known.
    pub fn has_geometry(&self) -> bool {
        self.orientation.is_some() && self.position.is_some()
    }

    /// The normal of the image plane, if the orientation is known.
    pub fn slice_normal(&self) -> Option<[f64; 3]> {
        self.orientation.as_ref().map(Orientation::normal)
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodeContext, Orientation};

    #[test]
    fn fresh_context_is_a_valid_image() {
        let ctx = DecodeContext::new();
        assert_eq!(ctx.width, 1);
        assert_eq!(ctx.height, 1);
        assert_eq!(ctx.bit_depth, 16);
        assert_eq!(ctx.rescale_slope, 1.);
        assert_eq!(ctx.rescale_intercept, 0.);
        assert_eq!(ctx.pixel_width, 1.);
        assert_eq!(ctx.pixel_height, 1.);
        assert_eq!(ctx.pixel_depth, 1.);
        assert_eq!(ctx.frame_count, 1);
        assert!(!ctx.stop);
        assert!(!ctx.compressed);
        assert!(!ctx.big_endian);
        assert!(!ctx.is_signed());
        assert!(!ctx.has_palette());
        assert!(!ctx.has_geometry());
        assert_eq!(ctx.slice_normal(), None);
    }

    #[test]
    fn orientation_is_normalized() {
        let o = Orientation::from_directions([2., 0., 0.], [0., 3., 0.]).unwrap();
        assert_eq!(o.row, [1., 0., 0.]);
        assert_eq!(o.column, [0., 1., 0.]);
        assert_eq!(o.normal(), [0., 0., 1.]);

        assert_eq!(Orientation::from_directions([0., 0., 0.], [0., 1., 0.]), None);
    }
}
