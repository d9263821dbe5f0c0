//! The header decode loop.
//!
//! The decoder walks the root data set of a DICOM stream
//! element by element,
//! handing every registered attribute to its [`TagHandler`]
//! and recording the position of every other attribute
//! so that its value can be read later on demand.
//! Nested data sets are skipped without being looked into.
//!
//! Decoding ends when a handler asks to stop
//! (which the pixel data handler does),
//! when the configured stop tag is reached,
//! or when the stream ends between two elements.
//!
//! [`TagHandler`]: crate::handler::TagHandler

use crate::context::DecodeContext;
use crate::registry::{standard_registry, HandlerRegistry};
use crate::sink::MetadataTable;
use dcmhead_core::header::{DataElementHeader, SequenceItemHeader};
use dcmhead_core::{Tag, VR};
use dcmhead_dictionary_std::tags;
use dcmhead_encoding::decode::explicit::ExplicitVRDecoder;
use dcmhead_encoding::decode::{self, DynDecoder};
use dcmhead_encoding::reader::{DicomReader, ElementReader, ReadError};
use dcmhead_encoding::text::SpecificCharacterSet;
use dcmhead_encoding::{Endianness, TransferSyntax};
use dcmhead_transfer_syntax_registry::{entries, get_registry};
use smallvec::{smallvec, SmallVec};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{Read, Seek, SeekFrom};
use tracing::{debug, trace, warn};

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

const PREAMBLE_LENGTH: u64 = 128;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The stream could not be read
    /// while looking for the preamble and magic code.
    #[snafu(display("Could not read the file preamble"))]
    ReadPreamble {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// The magic code `DICM` was not found where it was expected.
    #[snafu(display("Invalid DICOM data: magic code not found"))]
    NotDicom { backtrace: Backtrace },

    /// An element header could not be decoded.
    #[snafu(display("Could not decode data element header"))]
    ReadHeader {
        #[snafu(backtrace)]
        source: decode::Error,
    },

    /// An item header inside a nested data set could not be decoded.
    #[snafu(display("Could not decode item header"))]
    ReadItemHeader {
        #[snafu(backtrace)]
        source: decode::Error,
    },

    /// The value of an element could not be read or skipped.
    #[snafu(display("Could not read the value of {}", tag))]
    ReadValue {
        tag: Tag,
        #[snafu(backtrace)]
        source: ReadError,
    },

    /// The stream could not be moved back after looking ahead.
    #[snafu(display("Could not seek back to position {}", position))]
    SeekReader {
        position: u64,
        #[snafu(backtrace)]
        source: ReadError,
    },

    /// The data set is encoded in a way which cannot be read.
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An option value for the header decoder,
/// on whether to expect the 128-byte DICOM file preamble.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ReadPreamble {
    /// Look for the magic code after a preamble,
    /// then at the very start of the stream.
    /// If neither is found,
    /// the stream is read as a bare data set without a file meta group.
    #[default]
    Auto,
    /// Always expect the preamble followed by the magic code.
    Always,
    /// Expect the magic code at the very start of the stream.
    Never,
}

/// A builder for the header decoder.
///
/// ```no_run
/// # use dcmhead_parser::{HeaderDecodeOptions, ReadPreamble};
/// # use dcmhead_dictionary_std::tags;
/// let file = std::fs::File::open("image.dcm")?;
/// let header = HeaderDecodeOptions::new()
///     .read_preamble(ReadPreamble::Always)
///     .read_until(tags::PIXEL_DATA)
///     .decode(file)?;
/// println!("{}x{}", header.context.width, header.context.height);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Copy, Clone)]
pub struct HeaderDecodeOptions<'r> {
    read_preamble: ReadPreamble,
    registry: &'r HandlerRegistry,
    read_until: Option<Tag>,
    defer_limit: usize,
}

impl Default for HeaderDecodeOptions<'static> {
    fn default() -> Self {
        HeaderDecodeOptions {
            read_preamble: ReadPreamble::Auto,
            registry: standard_registry(),
            read_until: None,
            defer_limit: usize::MAX,
        }
    }
}

impl HeaderDecodeOptions<'static> {
    /// Start with the standard handlers and default options.
    pub fn new() -> Self {
        HeaderDecodeOptions::default()
    }
}

impl<'r> HeaderDecodeOptions<'r> {
    /// Set whether to read the 128-byte DICOM file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Use the given handlers instead of the standard ones.
    pub fn registry<'a>(self, registry: &'a HandlerRegistry) -> HeaderDecodeOptions<'a> {
        HeaderDecodeOptions {
            read_preamble: self.read_preamble,
            registry,
            read_until: self.read_until,
            defer_limit: self.defer_limit,
        }
    }

    /// Stop decoding at the first root data set element
    /// with a tag equal to or greater than the one given.
    /// That element is not processed.
    pub fn read_until(mut self, tag: Tag) -> Self {
        self.read_until = Some(tag);
        self
    }

    /// Set the maximum number of unhandled elements to record.
    /// Further unhandled elements are skipped without being recorded.
    pub fn defer_limit(mut self, limit: usize) -> Self {
        self.defer_limit = limit;
        self
    }

    /// Decode the header of the DICOM stream in `source`,
    /// starting from the source's current position.
    pub fn decode<S>(self, mut source: S) -> Result<DecodedHeader>
    where
        S: Read + Seek,
    {
        let base = source.stream_position().context(ReadPreambleSnafu)?;
        let start = detect_start(&mut source, base, self.read_preamble)?;
        let meta = start.is_some();
        let start = match start {
            Some(start) => start,
            None => base,
        };
        source
            .seek(SeekFrom::Start(start))
            .context(ReadPreambleSnafu)?;

        HeaderDecoder {
            options: self,
            reader: DicomReader::new_at(source, start),
            ctx: DecodeContext::new(),
            metadata: MetadataTable::new(),
            deferred: Vec::new(),
            meta,
        }
        .run()
    }
}

/// Decode the header of the DICOM stream in `source`
/// with the standard handlers and default options.
pub fn decode_header<S>(source: S) -> Result<DecodedHeader>
where
    S: Read + Seek,
{
    HeaderDecodeOptions::new().decode(source)
}

/// Locate the first element after the magic code.
///
/// Returns `None` if the stream is a bare data set.
fn detect_start<S>(source: &mut S, base: u64, option: ReadPreamble) -> Result<Option<u64>>
where
    S: Read + Seek,
{
    let mut head = Vec::with_capacity(PREAMBLE_LENGTH as usize + 4);
    source
        .take(PREAMBLE_LENGTH + 4)
        .read_to_end(&mut head)
        .context(ReadPreambleSnafu)?;
    let magic_at = |offset: usize| head.get(offset..offset + 4) == Some(&DICM_MAGIC_CODE[..]);

    match option {
        ReadPreamble::Always => {
            ensure!(magic_at(PREAMBLE_LENGTH as usize), NotDicomSnafu);
            Ok(Some(base + PREAMBLE_LENGTH + 4))
        }
        ReadPreamble::Never => {
            ensure!(magic_at(0), NotDicomSnafu);
            Ok(Some(base + 4))
        }
        ReadPreamble::Auto if magic_at(PREAMBLE_LENGTH as usize) => {
            Ok(Some(base + PREAMBLE_LENGTH + 4))
        }
        ReadPreamble::Auto if magic_at(0) => Ok(Some(base + 4)),
        ReadPreamble::Auto => {
            debug!("No magic code found, reading a bare data set");
            Ok(None)
        }
    }
}

/// The position and extent of an element
/// which was not handled during decoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DeferredElement {
    /// the element's tag
    pub tag: Tag,
    /// the element's value representation
    pub vr: VR,
    /// absolute byte offset of the value
    pub offset: u64,
    /// value length in bytes
    pub length: u32,
}

impl DeferredElement {
    /// Read the element value as text.
    pub fn read_string(&self, reader: &mut dyn ElementReader) -> Result<String, ReadError> {
        reader.seek(self.offset)?;
        reader.read_string(self.length)
    }

    /// Read the raw bytes of the element value.
    pub fn read_bytes(&self, reader: &mut dyn ElementReader) -> Result<Vec<u8>, ReadError> {
        reader.seek(self.offset)?;
        reader.read_bytes(self.length)
    }
}

/// The outcome of decoding a DICOM header.
#[derive(Debug, Clone)]
pub struct DecodedHeader {
    /// what the tag handlers learned about the image
    pub context: DecodeContext,
    /// every value reported by the tag handlers
    pub metadata: MetadataTable,
    /// the root elements without a handler, in stream order
    pub deferred: Vec<DeferredElement>,
    /// byte order of the data set
    pub byte_order: Endianness,
    /// character set declared by the data set
    pub character_set: SpecificCharacterSet,
}

impl DecodedHeader {
    /// Look up an unhandled element by tag.
    pub fn deferred_element(&self, tag: Tag) -> Option<&DeferredElement> {
        self.deferred.iter().find(|e| e.tag == tag)
    }

    /// Create a reader over the same stream
    /// for loading deferred values,
    /// set up with the data set's byte order and character set.
    pub fn value_reader<S>(&self, source: S) -> DicomReader<S>
    where
        S: Read + Seek,
    {
        let mut reader = DicomReader::new(source);
        reader.set_byte_order(self.byte_order);
        reader.set_character_set(self.character_set);
        reader
    }
}

/// A position in a nested data set being skipped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Nesting {
    /// expecting items or a sequence delimiter
    Sequence,
    /// expecting elements or an item delimiter
    Item,
}

/// The state of a single header decode.
struct HeaderDecoder<'r, S> {
    options: HeaderDecodeOptions<'r>,
    reader: DicomReader<S>,
    ctx: DecodeContext,
    metadata: MetadataTable,
    deferred: Vec<DeferredElement>,
    /// whether the stream has a file meta group
    meta: bool,
}

impl<'r, S> HeaderDecoder<'r, S>
where
    S: Read + Seek,
{
    fn run(mut self) -> Result<DecodedHeader> {
        let mut decoder: DynDecoder<S> = Box::new(ExplicitVRDecoder::little_endian());
        let mut in_meta = self.meta;
        if !in_meta {
            decoder = self.data_set_decoder()?;
        }

        loop {
            if in_meta && self.peek_group()? != Some(0x0002) {
                in_meta = false;
                decoder = self.data_set_decoder()?;
            }

            let header = match self.reader.decode_header(&decoder) {
                Ok(header) => header,
                Err(e) if e.is_clean_end_of_stream() => {
                    debug!("Reached the end of the stream");
                    break;
                }
                Err(e) => return Err(e).context(ReadHeaderSnafu),
            };

            if !in_meta {
                if let Some(until) = self.options.read_until {
                    if header.tag >= until {
                        debug!("Reached {}, stopping", header.tag);
                        break;
                    }
                }
            }

            if !self.process(&header, &decoder)? {
                break;
            }
        }

        Ok(DecodedHeader {
            context: self.ctx,
            metadata: self.metadata,
            deferred: self.deferred,
            byte_order: self.reader.byte_order(),
            character_set: self.reader.character_set(),
        })
    }

    /// Process one root element whose header was just read.
    ///
    /// Returns whether decoding should continue.
    fn process(&mut self, header: &DataElementHeader, decoder: &DynDecoder<S>) -> Result<bool> {
        let start = self.reader.position();
        let registry = self.options.registry;

        if let Some(handler) = registry.get_handler(header.tag) {
            trace!("Dispatching {} to {:?}", header.tag, handler);
            let proceed = handler.handle(header, &mut self.reader, &mut self.ctx, &mut self.metadata);
            if !proceed || self.ctx.stop {
                return Ok(false);
            }
            match header.len.get() {
                Some(len) => {
                    let end = start + u64::from(len);
                    if self.reader.position() != end {
                        warn!(
                            "Handler for {} left the reader at {}, expected {}",
                            header.tag,
                            self.reader.position(),
                            end
                        );
                        self.reader
                            .seek(end)
                            .context(ReadValueSnafu { tag: header.tag })?;
                    }
                }
                None => self.skip_nested(header, decoder)?,
            }
            return Ok(true);
        }

        match header.len.get() {
            None => self.skip_nested(header, decoder)?,
            Some(len) if header.vr == VR::SQ => {
                self.reader
                    .skip(u64::from(len))
                    .context(ReadValueSnafu { tag: header.tag })?;
            }
            Some(len) => {
                if self.deferred.len() < self.options.defer_limit {
                    self.deferred.push(DeferredElement {
                        tag: header.tag,
                        vr: header.vr,
                        offset: start,
                        length: len,
                    });
                }
                if header.tag == tags::SPECIFIC_CHARACTER_SET {
                    self.apply_character_set(header.tag, len)?;
                } else {
                    self.reader
                        .skip(u64::from(len))
                        .context(ReadValueSnafu { tag: header.tag })?;
                }
            }
        }
        Ok(true)
    }

    /// Switch text decoding to the declared character set.
    fn apply_character_set(&mut self, tag: Tag, len: u32) -> Result<()> {
        let value = self
            .reader
            .read_string(len)
            .context(ReadValueSnafu { tag })?;
        let code = value
            .split('\\')
            .map(|code| code.trim_matches(|c: char| c == ' ' || c == '\0'))
            .find(|code| !code.is_empty())
            .unwrap_or("");
        match SpecificCharacterSet::from_code(code) {
            Some(charset) => {
                debug!("Using character set {:?}", charset);
                self.reader.set_character_set(charset);
            }
            None => warn!("Unsupported character set `{}`, keeping the default", code),
        }
        Ok(())
    }

    /// Skip the contents of an undefined length element
    /// without looking into them.
    fn skip_nested(&mut self, header: &DataElementHeader, decoder: &DynDecoder<S>) -> Result<()> {
        trace!("Skipping nested data in {}", header.tag);
        let first = if header.tag == Tag::ITEM {
            Nesting::Item
        } else {
            Nesting::Sequence
        };
        let mut stack: SmallVec<[Nesting; 8]> = smallvec![first];

        while let Some(top) = stack.last().copied() {
            match top {
                Nesting::Sequence => {
                    let item = self
                        .reader
                        .decode_item_header(decoder)
                        .context(ReadItemHeaderSnafu)?;
                    match item {
                        SequenceItemHeader::Item { len } => match len.get() {
                            Some(len) => self
                                .reader
                                .skip(u64::from(len))
                                .context(ReadValueSnafu { tag: Tag::ITEM })?,
                            None => stack.push(Nesting::Item),
                        },
                        SequenceItemHeader::SequenceDelimiter => {
                            stack.pop();
                        }
                        SequenceItemHeader::ItemDelimiter => {
                            warn!("Stray item delimiter in {}", header.tag);
                        }
                    }
                }
                Nesting::Item => {
                    let element = self
                        .reader
                        .decode_header(decoder)
                        .context(ReadHeaderSnafu)?;
                    if element.tag == Tag::ITEM_DELIMITER {
                        stack.pop();
                    } else if element.len.is_undefined() {
                        stack.push(Nesting::Sequence);
                    } else {
                        self.reader
                            .skip(u64::from(element.len.0))
                            .context(ReadValueSnafu { tag: element.tag })?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Read the group number of the next element
    /// without consuming it.
    ///
    /// Returns `None` at the end of the stream.
    fn peek_group(&mut self) -> Result<Option<u16>> {
        let start = self.reader.position();
        let group = self
            .reader
            .read_bytes(2)
            .ok()
            .map(|bytes| u16::from_le_bytes([bytes[0], bytes[1]]));
        self.reader
            .seek(start)
            .context(SeekReaderSnafu { position: start })?;
        Ok(group)
    }

    /// Determine the encoding of the data set after the file meta group,
    /// and prepare the reader for it.
    fn data_set_decoder(&mut self) -> Result<DynDecoder<S>> {
        let ts = if self.meta {
            let uid = self.ctx.transfer_syntax_uid.as_str();
            match get_registry().get(uid) {
                Some(ts) => ts.clone(),
                None => {
                    warn!(
                        "Unknown transfer syntax `{}`, reading as explicit VR little endian",
                        uid
                    );
                    entries::EXPLICIT_VR_LITTLE_ENDIAN
                }
            }
        } else {
            self.sniff_bare_data_set()?
        };

        let decoder = ts
            .decoder_for::<S>()
            .context(UnsupportedTransferSyntaxSnafu { uid: ts.uid() })?;
        debug!("Reading data set as {}", ts.name());
        self.reader.set_byte_order(ts.endianness());
        Ok(decoder)
    }

    /// Guess the encoding of a data set without a file meta group:
    /// explicit VR little endian if a valid VR follows the first tag,
    /// implicit VR little endian otherwise.
    fn sniff_bare_data_set(&mut self) -> Result<TransferSyntax> {
        let start = self.reader.position();
        let head = self.reader.read_bytes(6).ok();
        self.reader
            .seek(start)
            .context(SeekReaderSnafu { position: start })?;
        let explicit = head
            .and_then(|head| VR::from_binary([head[4], head[5]]))
            .is_some();
        Ok(if explicit {
            entries::EXPLICIT_VR_LITTLE_ENDIAN
        } else {
            entries::IMPLICIT_VR_LITTLE_ENDIAN
        })
    }
}
