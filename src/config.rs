//! Decoder configuration.

/// Default capacity of the buffer wrapped around a container's source.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Configuration for opening a Smacker container.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use smacker::DecodeConfig;
///
/// let config = DecodeConfig::builder()
///     .max_frame_count(100_000)
///     .build();
/// assert_eq!(config.max_frame_count, Some(100_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeConfig {
    /// Capacity of the read buffer placed in front of the source.
    /// Default: 8 KiB
    pub buffer_capacity: usize,

    /// Reject headers declaring more frames than this.
    /// Checked before either per-frame array is read.
    /// Default: None (any frame count is accepted)
    pub max_frame_count: Option<u32>,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            max_frame_count: None,
        }
    }
}

impl DecodeConfig {
    /// Create a new configuration builder.
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }
}

/// Builder for [`DecodeConfig`].
#[derive(Debug, Clone, Default)]
pub struct DecodeConfigBuilder {
    config: DecodeConfig,
}

impl DecodeConfigBuilder {
    /// Set the read buffer capacity. Zero is bumped to one byte.
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.config.buffer_capacity = capacity.max(1);
        self
    }

    /// Set the frame count ceiling.
    pub fn max_frame_count(mut self, max: u32) -> Self {
        self.config.max_frame_count = Some(max);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> DecodeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecodeConfig::default();
        assert_eq!(config.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
        assert_eq!(config.max_frame_count, None);
        assert_eq!(DecodeConfig::builder().build(), config);
    }

    #[test]
    fn test_builder_zero_capacity() {
        let config = DecodeConfig::builder().buffer_capacity(0).build();
        assert_eq!(config.buffer_capacity, 1);
    }
}
