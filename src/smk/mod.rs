//! Smacker file header.
//!
//! The header is a fixed 104-byte preamble followed by two per-frame arrays
//! whose length comes from the frame count in the preamble:
//!
//! ```text
//! offset  size   field
//!      0     4   signature ("SMK2" / "SMK4")
//!      4     4   width
//!      8     4   height
//!     12     4   frame count
//!     16     4   frame rate (signed)
//!     20     4   flags
//!     24    28   largest unpacked audio buffer, one per track
//!     52    20   Huffman tree sizes
//!     72    28   audio track descriptors, one per track
//!    100     4   padding
//!    104   4*n   frame sizes
//! 104+4n     n   frame types
//! ```
//!
//! All integers are little-endian.

mod fields;
mod reader;

pub use fields::{AudioTrackDescriptor, FrameContentFlags, FrameRate, FrameSize, VideoFlags};
pub use reader::HeaderReader;

use std::fmt;
use std::time::Duration;

/// Number of audio track slots in every header, active or not.
pub const AUDIO_TRACK_COUNT: usize = 7;

/// Size of the header preamble, before the per-frame arrays.
pub const FIXED_HEADER_SIZE: u64 = 104;

/// Bytes of per-frame data in the header (one size word, one type byte).
pub const BYTES_PER_FRAME: u64 = 5;

/// File signature, identifying the format revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signature {
    /// "SMK2"
    Smk2,
    /// "SMK4"
    Smk4,
}

impl Signature {
    /// Match a 4-byte tag exactly against the known signatures.
    pub fn from_bytes(bytes: [u8; 4]) -> Option<Self> {
        match &bytes {
            b"SMK2" => Some(Self::Smk2),
            b"SMK4" => Some(Self::Smk4),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> &'static [u8; 4] {
        match self {
            Self::Smk2 => b"SMK2",
            Self::Smk4 => b"SMK4",
        }
    }

    /// Format revision number.
    pub fn version(&self) -> u8 {
        match self {
            Self::Smk2 => 2,
            Self::Smk4 => 4,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smk2 => write!(f, "SMK2"),
            Self::Smk4 => write!(f, "SMK4"),
        }
    }
}

/// Decoded Smacker file header.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// File signature.
    pub signature: Signature,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Number of frames, excluding the ring frame.
    pub frame_count: u32,
    /// Encoded frame rate.
    pub frame_rate: FrameRate,
    /// Video flags.
    pub flags: VideoFlags,
    /// Size of the largest unpacked audio buffer in bytes, per track.
    pub max_audio_buffer_size: [u32; AUDIO_TRACK_COUNT],
    /// Total size in bytes of the Huffman trees stored in the file.
    pub huffman_trees_total_size: u32,
    /// Allocation size for the mono block maps tree.
    pub mono_block_maps_alloc_size: u32,
    /// Allocation size for the mono block colours tree.
    pub mono_block_colors_alloc_size: u32,
    /// Allocation size for the full blocks tree.
    pub full_blocks_alloc_size: u32,
    /// Allocation size for the block type tree.
    pub block_type_alloc_size: u32,
    /// Frequency and format of each audio track.
    pub track_info: [AudioTrackDescriptor; AUDIO_TRACK_COUNT],
    /// Size entry per frame. Flag bits are still set; see [`FrameSize::byte_len`].
    pub frame_sizes: Vec<FrameSize>,
    /// Content flags per frame.
    pub frame_types: Vec<FrameContentFlags>,
}

impl Header {
    /// Total header length in bytes; the frame payload starts here.
    pub fn encoded_len(&self) -> u64 {
        FIXED_HEADER_SIZE + BYTES_PER_FRAME * u64::from(self.frame_count)
    }

    /// Frames per second.
    pub fn fps(&self) -> f64 {
        self.frame_rate.fps()
    }

    /// Playback duration of all frames.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(f64::from(self.frame_count) / self.fps())
    }

    /// Descriptor for audio track `track`, if in range.
    pub fn audio_track(&self, track: usize) -> Option<AudioTrackDescriptor> {
        self.track_info.get(track).copied()
    }

    /// Tracks whose descriptor says audio data is present, with their index.
    pub fn active_audio_tracks(&self) -> impl Iterator<Item = (usize, AudioTrackDescriptor)> + '_ {
        self.track_info
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, track)| track.has_audio_data())
    }

    /// Iterate over the per-frame entries.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = Frame> + '_ {
        self.frame_sizes
            .iter()
            .zip(&self.frame_types)
            .enumerate()
            .map(|(index, (&size, &content))| Frame {
                index,
                size,
                content,
            })
    }

    /// Number of key frames.
    pub fn keyframe_count(&self) -> usize {
        self.frame_sizes.iter().filter(|s| s.is_keyframe()).count()
    }
}

/// One frame's header entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Frame index (0-based).
    pub index: usize,
    /// Size entry.
    pub size: FrameSize,
    /// Content flags.
    pub content: FrameContentFlags,
}
