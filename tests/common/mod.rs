//! Shared test harness for integration tests.
//!
//! Provides [`SmkBuilder`], which lays out header bytes field by field so
//! tests can decode them and compare against known values.

#![allow(dead_code)]

use bytes::{BufMut, BytesMut};
use std::io::Write;
use tempfile::NamedTempFile;

/// Builder for raw Smacker header bytes.
#[derive(Debug, Clone)]
pub struct SmkBuilder {
    pub signature: [u8; 4],
    pub width: u32,
    pub height: u32,
    pub frame_rate: i32,
    pub flags: u32,
    pub max_audio_buffer_size: [u32; 7],
    pub tree_sizes: [u32; 5],
    pub track_info: [u32; 7],
    pub padding: u32,
    pub frames: Vec<(u32, u8)>,
    /// Overrides the frame count written to the header.
    pub declared_frame_count: Option<u32>,
    pub payload: Vec<u8>,
}

impl Default for SmkBuilder {
    fn default() -> Self {
        Self {
            signature: *b"SMK2",
            width: 640,
            height: 480,
            frame_rate: 66,
            flags: 0,
            max_audio_buffer_size: [0; 7],
            tree_sizes: [0; 5],
            track_info: [0; 7],
            padding: 0,
            frames: Vec::new(),
            declared_frame_count: None,
            payload: Vec::new(),
        }
    }
}

impl SmkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signature(mut self, tag: &[u8; 4]) -> Self {
        self.signature = *tag;
        self
    }

    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn frame_rate(mut self, raw: i32) -> Self {
        self.frame_rate = raw;
        self
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn audio_track(mut self, index: usize, descriptor: u32, max_buffer: u32) -> Self {
        self.track_info[index] = descriptor;
        self.max_audio_buffer_size[index] = max_buffer;
        self
    }

    pub fn tree_sizes(mut self, sizes: [u32; 5]) -> Self {
        self.tree_sizes = sizes;
        self
    }

    pub fn frame(mut self, size: u32, kind: u8) -> Self {
        self.frames.push((size, kind));
        self
    }

    pub fn declared_frame_count(mut self, count: u32) -> Self {
        self.declared_frame_count = Some(count);
        self
    }

    pub fn payload(mut self, payload: &[u8]) -> Self {
        self.payload = payload.to_vec();
        self
    }

    /// Length of the header region alone.
    pub fn header_len(&self) -> usize {
        104 + self.frames.len() * 5
    }

    pub fn build(&self) -> Vec<u8> {
        let frame_count = self
            .declared_frame_count
            .unwrap_or(self.frames.len() as u32);

        let mut buf = BytesMut::with_capacity(self.header_len() + self.payload.len());
        buf.put_slice(&self.signature);
        buf.put_u32_le(self.width);
        buf.put_u32_le(self.height);
        buf.put_u32_le(frame_count);
        buf.put_i32_le(self.frame_rate);
        buf.put_u32_le(self.flags);
        for size in self.max_audio_buffer_size {
            buf.put_u32_le(size);
        }
        for size in self.tree_sizes {
            buf.put_u32_le(size);
        }
        for track in self.track_info {
            buf.put_u32_le(track);
        }
        buf.put_u32_le(self.padding);
        for (size, _) in &self.frames {
            buf.put_u32_le(*size);
        }
        for (_, kind) in &self.frames {
            buf.put_u8(*kind);
        }
        buf.put_slice(&self.payload);
        buf.to_vec()
    }

    /// Write the built bytes to a temporary file.
    pub fn write_temp(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(&self.build())
            .expect("failed to write temp file");
        file.flush().expect("failed to flush temp file");
        file
    }
}
