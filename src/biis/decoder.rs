//! Streaming BIIS-XML decoder using quick-xml

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, trace, warn};
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::assembler::RecordAssembler;
use super::dispatch::DispatchTable;
use super::error::BiisError;
use super::outcome::{DecodeFailure, DecodeOutcome};
use super::path::PathTracker;

/// Default capacity of the buffered reader used by [`BiisDecoder::open`]
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Reader settings for a decode pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Trim surrounding whitespace from collected element text
    pub trim_text: bool,
    /// Capacity of the buffered file reader
    pub buffer_size: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            trim_text: false,
            buffer_size: DEFAULT_INPUT_BUFFER_SIZE,
        }
    }
}

/// Single-pass decoder turning one BIIS-XML document into a GIF container.
///
/// Every start tag extends the current path. When the path has an entry in
/// the [`DispatchTable`], the element's text is collected up to its end tag
/// and handed to the [`RecordAssembler`]; otherwise the decoder descends
/// into the element. Ignored entries are descended into like unknown ones.
/// A self-closing element is a mapped element with empty text.
///
/// Text is stored as written unless [`trim_text`](Self::trim_text) is set.
pub struct BiisDecoder<R: BufRead> {
    reader: Reader<R>,
    table: DispatchTable,
    tracker: PathTracker,
    assembler: RecordAssembler,
    trim: bool,
    elements: usize,
    mapped: usize,
}

impl BiisDecoder<BufReader<File>> {
    /// Open a BIIS-XML file for decoding
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BiisError> {
        Self::open_with_options(path, DecodeOptions::default())
    }

    /// Open a BIIS-XML file with explicit reader settings
    pub fn open_with_options<P: AsRef<Path>>(
        path: P,
        options: DecodeOptions,
    ) -> Result<Self, BiisError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::with_capacity(options.buffer_size, file);
        Ok(Self::new(reader).trim_text(options.trim_text))
    }
}

impl<R: BufRead> BiisDecoder<R> {
    /// Create a decoder over a BufRead source using the standard table
    pub fn new(reader: R) -> Self {
        Self {
            reader: Reader::from_reader(reader),
            table: DispatchTable::standard(),
            tracker: PathTracker::new(),
            assembler: RecordAssembler::new(),
            trim: false,
            elements: 0,
            mapped: 0,
        }
    }

    /// Replace the dispatch table
    pub fn with_table(mut self, table: DispatchTable) -> Self {
        self.table = table;
        self
    }

    /// Enable or disable trimming of element text.
    ///
    /// The text of a leaf is trimmed once after all of its text and CDATA
    /// parts are joined, so whitespace between the parts is kept.
    pub fn trim_text(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// The dispatch table in use
    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    /// Decode the document to its end.
    ///
    /// On failure the record assembled so far is committed and returned in
    /// [`DecodeFailure::partial`].
    pub fn decode(mut self) -> Result<DecodeOutcome, DecodeFailure> {
        let result = self.run();
        let (elements, mapped) = (self.elements, self.mapped);
        let (container, notes) = self.assembler.commit();

        match result {
            Ok(()) => {
                info!(
                    "Decoded {} elements ({} mapped, {} notes)",
                    elements,
                    mapped,
                    notes.len()
                );
                Ok(DecodeOutcome { container, notes })
            }
            Err(error) => {
                warn!("Decode stopped after {} elements: {}", elements, error);
                Err(DecodeFailure {
                    error,
                    partial: Box::new(container),
                    notes,
                })
            }
        }
    }

    fn run(&mut self) -> Result<(), BiisError> {
        let mut buf = Vec::new();
        let mut text_buf = Vec::new();

        loop {
            let decoder = self.reader.decoder();
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let path = self.tracker.enter(local_name(decoder, e)?);
                    self.elements += 1;

                    match self.table.lookup(&path) {
                        Some(action) if !action.is_ignore() => {
                            let mut text = read_text(&mut self.reader, &mut text_buf, &path)?;
                            if self.trim {
                                text = text.trim().to_string();
                            }
                            self.assembler.apply(&path, action, &text)?;
                            self.tracker.exit();
                            self.mapped += 1;
                        }
                        Some(_) => trace!("Ignoring {}", path),
                        None => trace!("Descending into {}", path),
                    }
                }
                Event::Empty(ref e) => {
                    let path = self.tracker.enter(local_name(decoder, e)?);
                    self.elements += 1;

                    match self.table.lookup(&path) {
                        Some(action) if !action.is_ignore() => {
                            self.assembler.apply(&path, action, "")?;
                            self.mapped += 1;
                        }
                        Some(_) => trace!("Ignoring {}", path),
                        None => {}
                    }
                    self.tracker.exit();
                }
                Event::End(_) => {
                    self.tracker.exit();
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !self.tracker.is_empty() {
            return Err(BiisError::UnexpectedEof {
                path: self.tracker.current(),
            });
        }

        debug!("Reached end of document");
        Ok(())
    }
}

/// Collect the text of a mapped leaf up to and including its end tag
fn read_text<R: BufRead>(
    reader: &mut Reader<R>,
    buf: &mut Vec<u8>,
    path: &str,
) -> Result<String, BiisError> {
    let decoder = reader.decoder();
    let mut text = String::new();
    loop {
        buf.clear();
        match reader.read_event_into(buf)? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => {
                text.push_str(&decoder.decode(&c).map_err(quick_xml::Error::from)?)
            }
            Event::Start(ref e) | Event::Empty(ref e) => {
                return Err(BiisError::NestedElement {
                    path: path.to_string(),
                    child: local_name(decoder, e)?,
                });
            }
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(BiisError::UnexpectedEof {
                    path: path.to_string(),
                })
            }
            _ => {}
        }
    }
}

fn local_name(decoder: Decoder, e: &BytesStart<'_>) -> Result<String, BiisError> {
    let local = e.local_name();
    let name = decoder
        .decode(local.as_ref())
        .map_err(quick_xml::Error::from)?;
    Ok(name.into_owned())
}
