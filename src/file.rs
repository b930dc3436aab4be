//! Smacker container.

use crate::smk::{Header, HeaderReader};
use crate::{DecodeConfig, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// An opened Smacker file.
///
/// The header is decoded once when the file is opened. The source stays
/// owned by the container, positioned at the first byte after the header,
/// until [`SmkFile::close`] releases it.
#[derive(Debug)]
pub struct SmkFile<R> {
    header: Header,
    reader: Option<BufReader<R>>,
}

impl SmkFile<File> {
    /// Open and decode the Smacker file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &DecodeConfig::default())
    }

    /// Open and decode the Smacker file at `path` with a custom configuration.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &DecodeConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "Opened Smacker file");
        Self::parse_with_config(file, config)
    }
}

impl<R: Read> SmkFile<R> {
    /// Decode a Smacker file from a stream positioned at its first byte.
    pub fn parse(reader: R) -> Result<Self> {
        Self::parse_with_config(reader, &DecodeConfig::default())
    }

    /// Decode a Smacker file from a stream with a custom configuration.
    pub fn parse_with_config(reader: R, config: &DecodeConfig) -> Result<Self> {
        let reader = BufReader::with_capacity(config.buffer_capacity, reader);
        let mut header_reader = HeaderReader::with_config(reader, config);
        let header = header_reader.parse()?;

        Ok(Self {
            header,
            reader: Some(header_reader.into_inner()),
        })
    }
}

impl<R> SmkFile<R> {
    /// The decoded header. Remains valid after [`SmkFile::close`].
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Stream positioned at the start of the frame payload.
    ///
    /// Returns `None` once the file has been closed.
    pub fn payload_mut(&mut self) -> Option<&mut BufReader<R>> {
        self.reader.as_mut()
    }

    /// Whether [`SmkFile::close`] has released the source.
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Release the underlying source.
    ///
    /// Calling this again, or on a container whose source holds no resource,
    /// does nothing.
    pub fn close(&mut self) -> Result<()> {
        if let Some(reader) = self.reader.take() {
            debug!(buffered = reader.buffer().len(), "Closing Smacker file");
            drop(reader.into_inner());
        }
        Ok(())
    }

    /// Split into the header and the payload stream, if still open.
    pub fn into_parts(self) -> (Header, Option<BufReader<R>>) {
        (self.header, self.reader)
    }
}
