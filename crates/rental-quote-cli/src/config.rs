//! Quote options loaded from a TOML file.
//!
//! Every key is optional:
//!
//! ```toml
//! minimum_charge_hours = 24
//! no_selection_placeholders = ["Chọn Ngày", "Select Date"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use rental_quote::QuoteOptions;

pub fn load_options(path: Option<&Path>) -> Result<QuoteOptions> {
    let Some(path) = path else {
        return Ok(QuoteOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_options(&text).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn parse_options(text: &str) -> Result<QuoteOptions> {
    Ok(toml::from_str(text)?)
}
