/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Converter configuration.
//!
//! This module provides the options shared by every field of a conversion
//! pass.

use ledgerconv_text::{CodePage, DEFAULT_PLACEHOLDER, LegacyTextCodec};
use serde::{Deserialize, Serialize};

/// Configuration for a [`BulkConverter`](crate::BulkConverter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Code page of legacy text and display fields.
    pub code_page: CodePage,
    /// Character substituted for bytes with no text meaning.
    pub placeholder: char,
    /// Whether trailing low-value (0x00) bytes are trimmed with blanks.
    pub trim_low_values: bool,
    /// Whether each field dispatch is logged at trace level.
    pub log_fields: bool,
}

impl ConverterConfig {
    /// Creates a configuration with the legacy defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code_page: CodePage::Cp037,
            placeholder: DEFAULT_PLACEHOLDER,
            trim_low_values: false,
            log_fields: false,
        }
    }

    /// Sets the code page.
    #[must_use]
    pub const fn with_code_page(mut self, code_page: CodePage) -> Self {
        self.code_page = code_page;
        self
    }

    /// Sets the placeholder character.
    #[must_use]
    pub const fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets whether trailing low values are trimmed.
    #[must_use]
    pub const fn with_trim_low_values(mut self, trim: bool) -> Self {
        self.trim_low_values = trim;
        self
    }

    /// Sets whether each field dispatch is logged.
    #[must_use]
    pub const fn with_log_fields(mut self, log: bool) -> Self {
        self.log_fields = log;
        self
    }

    /// Builds the text codec described by this configuration.
    #[must_use]
    pub const fn text_codec(&self) -> LegacyTextCodec {
        LegacyTextCodec::new(self.code_page)
            .with_placeholder(self.placeholder)
            .with_trim_low_values(self.trim_low_values)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for converter configuration.
#[derive(Debug, Default)]
pub struct ConverterConfigBuilder {
    code_page: Option<CodePage>,
    placeholder: Option<char>,
    trim_low_values: bool,
    log_fields: bool,
}

impl ConverterConfigBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the code page.
    #[must_use]
    pub const fn code_page(mut self, code_page: CodePage) -> Self {
        self.code_page = Some(code_page);
        self
    }

    /// Sets the placeholder character.
    #[must_use]
    pub const fn placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Sets whether trailing low values are trimmed.
    #[must_use]
    pub const fn trim_low_values(mut self, trim: bool) -> Self {
        self.trim_low_values = trim;
        self
    }

    /// Sets whether each field dispatch is logged.
    #[must_use]
    pub const fn log_fields(mut self, log: bool) -> Self {
        self.log_fields = log;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ConverterConfig {
        let mut config = ConverterConfig::new();
        if let Some(code_page) = self.code_page {
            config.code_page = code_page;
        }
        if let Some(placeholder) = self.placeholder {
            config.placeholder = placeholder;
        }
        config.trim_low_values = self.trim_low_values;
        config.log_fields = self.log_fields;
        config
    }
}
