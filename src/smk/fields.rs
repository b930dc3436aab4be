//! Packed header fields.
//!
//! Each type here is a transparent wrapper over the raw integer stored in the
//! file. Accessors decode bits on every call; nothing is cached.

use std::fmt;

/// Encoded frame rate.
///
/// Positive values are milliseconds per frame, negative values are
/// hundredths of a millisecond per frame, and zero means 10 fps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct FrameRate(pub i32);

impl FrameRate {
    /// Raw value as stored in the header.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Frames per second.
    pub fn fps(self) -> f64 {
        match self.0 {
            r if r > 0 => 1000.0 / f64::from(r),
            // Widen before negating; -i32::MIN does not fit in an i32.
            r if r < 0 => 100_000.0 / -f64::from(r),
            _ => 10.0,
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} fps", self.fps())
    }
}

/// Video flags from the header.
///
/// No bits have a documented meaning; the value is carried through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct VideoFlags(pub u32);

impl VideoFlags {
    pub fn bits(self) -> u32 {
        self.0
    }
}

/// Frequency and format of one audio track.
///
/// ```text
/// bit 31     compressed
/// bit 30     track has audio data
/// bit 29     1 = 16-bit, 0 = 8-bit
/// bit 28     1 = stereo, 0 = mono
/// bits 27-26 both zero = version 2 sound decompression
/// bits 25-24 unused
/// bits 23-0  sample rate
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct AudioTrackDescriptor(pub u32);

impl AudioTrackDescriptor {
    const COMPRESSED: u32 = 1 << 31;
    const HAS_DATA: u32 = 1 << 30;
    const SIXTEEN_BIT: u32 = 1 << 29;
    const STEREO: u32 = 1 << 28;
    const CODEC_MASK: u32 = 0b11 << 26;
    const SAMPLE_RATE_MASK: u32 = 0x00FF_FFFF;

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_compressed(self) -> bool {
        self.0 & Self::COMPRESSED != 0
    }

    pub fn has_audio_data(self) -> bool {
        self.0 & Self::HAS_DATA != 0
    }

    /// Sample size in bits: 16 or 8.
    pub fn bit_depth(self) -> u8 {
        if self.0 & Self::SIXTEEN_BIT != 0 {
            16
        } else {
            8
        }
    }

    /// Number of channels: 2 (stereo) or 1 (mono).
    pub fn channel_count(self) -> u8 {
        if self.0 & Self::STEREO != 0 {
            2
        } else {
            1
        }
    }

    /// Whether the track uses version 2 sound decompression.
    pub fn uses_legacy_codec(self) -> bool {
        self.0 & Self::CODEC_MASK == 0
    }

    /// Sample rate in Hz.
    pub fn sample_rate(self) -> u32 {
        self.0 & Self::SAMPLE_RATE_MASK
    }
}

impl fmt::Debug for AudioTrackDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioTrackDescriptor")
            .field("raw", &format_args!("{:#010x}", self.0))
            .field("compressed", &self.is_compressed())
            .field("has_audio_data", &self.has_audio_data())
            .field("bit_depth", &self.bit_depth())
            .field("channels", &self.channel_count())
            .field("sample_rate", &self.sample_rate())
            .finish()
    }
}

/// Size entry for one frame.
///
/// Bit 0 marks a key frame. Bit 1 is reserved. Both must be cleared to get
/// the byte length of the frame payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct FrameSize(pub u32);

impl FrameSize {
    const KEYFRAME: u32 = 1 << 0;
    const FLAG_MASK: u32 = 0b11;

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_keyframe(self) -> bool {
        self.0 & Self::KEYFRAME != 0
    }

    /// Payload length in bytes, with both flag bits cleared.
    pub fn byte_len(self) -> u32 {
        self.0 & !Self::FLAG_MASK
    }
}

/// Contents of one frame.
///
/// ```text
/// bit 0     palette record
/// bits 1-7  audio data for tracks 0-6
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct FrameContentFlags(pub u8);

impl FrameContentFlags {
    const PALETTE: u8 = 1 << 0;

    pub fn raw(self) -> u8 {
        self.0
    }

    pub fn has_palette(self) -> bool {
        self.0 & Self::PALETTE != 0
    }

    /// Whether the frame carries audio for `track` (0-6).
    ///
    /// Out-of-range tracks are never present.
    pub fn has_audio(self, track: usize) -> bool {
        track < super::AUDIO_TRACK_COUNT && self.0 & (1 << (track + 1)) != 0
    }

    /// Indices of the tracks this frame carries audio for, ascending.
    pub fn audio_tracks(self) -> impl Iterator<Item = usize> {
        (0..super::AUDIO_TRACK_COUNT).filter(move |&track| self.has_audio(track))
    }
}
