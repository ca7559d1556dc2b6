//! Display configuration
//!
//! Identifies one physical panel: where it sits on the bus and how big
//! its page RAM window is. Created once at startup and never changed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::command::DEFAULT_CONTRAST;
use crate::packing::PAGE_HEIGHT;

/// Default SH1106 I2C address
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate address (SA0 pin pulled high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Widest window the driver will address
pub const MAX_WIDTH: u16 = 128;

/// Most pages the controller has
pub const MAX_PAGES: u8 = 8;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width/height outside what the controller can address
    InvalidGeometry,
    /// Address is not a 7-bit I2C address
    InvalidAddress,
    /// Configuration text could not be parsed
    Parse,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidGeometry => f.write_str("unsupported display geometry"),
            ConfigError::InvalidAddress => f.write_str("address is not 7-bit"),
            ConfigError::Parse => f.write_str("malformed display configuration"),
        }
    }
}

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels, a multiple of 8
    pub height: u16,
    /// Contrast sent during initialization
    pub contrast: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayConfig {
    /// 128x64 panel at 0x3C
    pub const fn new() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            width: 128,
            height: 64,
            contrast: DEFAULT_CONTRAST,
        }
    }

    /// Use a different bus address
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Use a different initial contrast
    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Use a different panel size
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Number of 8-row pages
    pub const fn pages(&self) -> u8 {
        (self.height / PAGE_HEIGHT) as u8
    }

    /// Check the configuration against the controller's limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address > 0x7F {
            return Err(ConfigError::InvalidAddress);
        }
        let pages = self.height / PAGE_HEIGHT;
        if self.width == 0
            || self.width > MAX_WIDTH
            || self.height % PAGE_HEIGHT != 0
            || pages == 0
            || pages > MAX_PAGES as u16
        {
            return Err(ConfigError::InvalidGeometry);
        }
        Ok(())
    }

    /// Parse a configuration from TOML text
    ///
    /// Keys left out keep their defaults:
    ///
    /// ```toml
    /// address = 0x3D
    /// contrast = 0xCF
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.address, 0x3C);
        assert_eq!((config.width, config.height), (128, 64));
        assert_eq!(config.contrast, 0x7F);
        assert_eq!(config.pages(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = DisplayConfig::new()
            .with_address(ALTERNATE_ADDRESS)
            .with_contrast(0xCF)
            .with_size(128, 32);
        assert_eq!(config.address, 0x3D);
        assert_eq!(config.contrast, 0xCF);
        assert_eq!(config.pages(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let bad = [(128, 60), (128, 0), (0, 64), (132, 64), (128, 72)];
        for (w, h) in bad {
            assert_eq!(
                DisplayConfig::new().with_size(w, h).validate(),
                Err(ConfigError::InvalidGeometry),
                "{w}x{h}"
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range_address() {
        assert_eq!(
            DisplayConfig::new().with_address(0x80).validate(),
            Err(ConfigError::InvalidAddress)
        );
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml_partial() {
        let config = DisplayConfig::from_toml("address = 0x3D\ncontrast = 207\n").unwrap();
        assert_eq!(config.address, 0x3D);
        assert_eq!(config.contrast, 207);
        assert_eq!(config.height, 64);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml_errors() {
        assert_eq!(
            DisplayConfig::from_toml("width = \"wide\""),
            Err(ConfigError::Parse)
        );
        assert_eq!(
            DisplayConfig::from_toml("height = 12"),
            Err(ConfigError::InvalidGeometry)
        );
    }
}
