//! Parsing of typed RGB components

use crate::color::{Channel, Rgb};
use crate::error::{Error, Result};

/// Parse one decimal component, accepting surrounding whitespace and a sign
pub fn parse_component(channel: Channel, text: &str) -> Result<i32> {
    text.trim().parse::<i32>().map_err(|_| Error::InvalidInput {
        channel,
        value: text.to_string(),
    })
}

/// Parse and range-check one component
pub fn parse_channel(channel: Channel, text: &str) -> Result<i32> {
    let value = parse_component(channel, text)?;
    if !(0..=255).contains(&value) {
        return Err(Error::ComponentOutOfRange { channel, value });
    }
    Ok(value)
}

/// Parse three text fields into a color, red first
pub fn parse_rgb(red: &str, green: &str, blue: &str) -> Result<Rgb> {
    Ok(Rgb::new(
        parse_channel(Channel::Red, red)?,
        parse_channel(Channel::Green, green)?,
        parse_channel(Channel::Blue, blue)?,
    ))
}
