//! Smacker header reader.

use super::{
    AudioTrackDescriptor, FrameContentFlags, FrameRate, FrameSize, Header, Signature, VideoFlags,
    AUDIO_TRACK_COUNT,
};
use crate::{DecodeConfig, Error, Result};
use bytes::Buf;
use std::io::Read;
use tracing::{debug, trace, warn};

/// Per-frame entries read at a time. Bounds what is allocated ahead of data
/// actually present in the stream.
const FRAME_CHUNK: usize = 4096;

/// Sequential decoder for the header region.
///
/// Fields are read strictly in file order; the frame count must be known
/// before the per-frame arrays can be sized.
pub struct HeaderReader<R> {
    reader: R,
    offset: u64,
    max_frame_count: Option<u32>,
}

impl<R: Read> HeaderReader<R> {
    /// Create a header reader over a stream positioned at the start of the file.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            offset: 0,
            max_frame_count: None,
        }
    }

    /// Create a header reader honouring the limits in `config`.
    pub fn with_config(reader: R, config: &DecodeConfig) -> Self {
        Self {
            max_frame_count: config.max_frame_count,
            ..Self::new(reader)
        }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Return the underlying stream, positioned wherever decoding stopped.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decode the header.
    pub fn parse(&mut self) -> Result<Header> {
        let tag = self.read_tag("signature")?;
        let width = self.read_u32("width")?;
        let height = self.read_u32("height")?;
        let frame_count = self.read_u32("frame_count")?;

        if let Some(max) = self.max_frame_count {
            if frame_count > max {
                return Err(Error::FrameCountLimit { frame_count, max });
            }
        }

        let frame_rate = FrameRate(self.read_i32("frame_rate")?);
        let flags = VideoFlags(self.read_u32("flags")?);
        let max_audio_buffer_size = self.read_track_words("max_audio_buffer_size")?;
        let huffman_trees_total_size = self.read_u32("huffman_trees_total_size")?;
        let mono_block_maps_alloc_size = self.read_u32("mono_block_maps_alloc_size")?;
        let mono_block_colors_alloc_size = self.read_u32("mono_block_colors_alloc_size")?;
        let full_blocks_alloc_size = self.read_u32("full_blocks_alloc_size")?;
        let block_type_alloc_size = self.read_u32("block_type_alloc_size")?;
        let track_info = self
            .read_track_words("track_info")?
            .map(AudioTrackDescriptor);
        self.read_tag("padding")?;

        let frame_sizes = self.read_frame_array(frame_count, 4, "frame_sizes", |buf| {
            FrameSize(buf.get_u32_le())
        })?;
        let frame_types = self.read_frame_array(frame_count, 1, "frame_types", |buf| {
            FrameContentFlags(buf.get_u8())
        })?;

        let signature = Signature::from_bytes(tag).ok_or_else(|| {
            warn!(tag = %tag.escape_ascii(), "Rejecting file with unknown signature");
            Error::InvalidSignature(tag)
        })?;

        debug!(
            %signature,
            width,
            height,
            frame_count,
            fps = frame_rate.fps(),
            header_len = self.offset,
            "Decoded Smacker header"
        );

        Ok(Header {
            signature,
            width,
            height,
            frame_count,
            frame_rate,
            flags,
            max_audio_buffer_size,
            huffman_trees_total_size,
            mono_block_maps_alloc_size,
            mono_block_colors_alloc_size,
            full_blocks_alloc_size,
            block_type_alloc_size,
            track_info,
            frame_sizes,
            frame_types,
        })
    }

    /// Fill `buf` from the stream. `start` is where the enclosing field began.
    fn fill(&mut self, buf: &mut [u8], field: &'static str, start: u64) -> Result<()> {
        self.reader
            .read_exact(buf)
            .map_err(|e| Error::from_read(e, field, start))?;
        self.offset += buf.len() as u64;
        Ok(())
    }

    fn read_tag(&mut self, field: &'static str) -> Result<[u8; 4]> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf, field, self.offset)?;
        Ok(buf)
    }

    fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        self.read_tag(field).map(u32::from_le_bytes)
    }

    fn read_i32(&mut self, field: &'static str) -> Result<i32> {
        self.read_tag(field).map(i32::from_le_bytes)
    }

    /// Read one little-endian word per audio track slot.
    fn read_track_words(&mut self, field: &'static str) -> Result<[u32; AUDIO_TRACK_COUNT]> {
        let mut raw = [0u8; AUDIO_TRACK_COUNT * 4];
        self.fill(&mut raw, field, self.offset)?;
        let mut buf = &raw[..];
        Ok(std::array::from_fn(|_| buf.get_u32_le()))
    }

    /// Read `count` fixed-width entries, decoding each with `decode`.
    fn read_frame_array<T>(
        &mut self,
        count: u32,
        width: usize,
        field: &'static str,
        mut decode: impl FnMut(&mut &[u8]) -> T,
    ) -> Result<Vec<T>> {
        let start = self.offset;
        let count = count as usize;
        let mut entries = Vec::with_capacity(count.min(FRAME_CHUNK));
        let mut chunk = Vec::new();
        let mut remaining = count;

        while remaining > 0 {
            let n = remaining.min(FRAME_CHUNK);
            chunk.resize(n * width, 0);
            self.fill(&mut chunk, field, start)?;

            let mut buf = chunk.as_slice();
            while buf.has_remaining() {
                entries.push(decode(&mut buf));
            }
            remaining -= n;
        }

        trace!(field, count, start, "Read per-frame array");
        Ok(entries)
    }
}
