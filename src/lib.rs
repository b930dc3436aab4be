//! # smacker
//!
//! Header decoding for Smacker video containers.
//!
//! A Smacker file starts with a header describing the video (dimensions,
//! frame rate, frame count), up to seven audio tracks, the sizes of the
//! Huffman trees used by the frame decoder, and a size and content entry
//! for every frame. This crate decodes that header and hands back the
//! stream, positioned at the frame payload, for a frame decoder to consume.
//!
//! ## Modules
//!
//! - `smk` - Header layout, the header reader, and packed field types
//! - `file` - The [`SmkFile`] container owning the source stream
//! - `config` - Decoder configuration
//!
//! ## Example
//!
//! ```no_run
//! let mut smk = smacker::open("intro.smk").unwrap();
//! let header = smk.header();
//!
//! println!("{} {}x{} @ {}", header.signature, header.width, header.height, header.frame_rate);
//!
//! for (index, track) in header.active_audio_tracks() {
//!     println!(
//!         "Track {}: {}Hz {}-bit {}ch",
//!         index,
//!         track.sample_rate(),
//!         track.bit_depth(),
//!         track.channel_count()
//!     );
//! }
//!
//! for frame in header.frames().filter(|f| f.size.is_keyframe()) {
//!     println!("Key frame {} ({} bytes)", frame.index, frame.size.byte_len());
//! }
//!
//! smk.close().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod smk;

pub use config::DecodeConfig;
pub use error::{Error, Result};
pub use file::SmkFile;
pub use smk::{
    AudioTrackDescriptor, Frame, FrameContentFlags, FrameRate, FrameSize, Header, HeaderReader,
    Signature, VideoFlags,
};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Open the Smacker file at `path` and decode its header.
pub fn open<P: AsRef<Path>>(path: P) -> Result<SmkFile<File>> {
    SmkFile::open(path)
}

/// Decode a Smacker file from `reader`, which must be at the start of the file.
pub fn parse<R: Read>(reader: R) -> Result<SmkFile<R>> {
    SmkFile::parse(reader)
}

/// Decode only the header from an in-memory file.
pub fn parse_header(data: &[u8]) -> Result<Header> {
    HeaderReader::new(data).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file() {
        let result = open("/nonexistent/file.smk");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_header_empty() {
        let err = parse_header(&[]).unwrap_err();
        assert!(err.is_truncated());
    }
}
