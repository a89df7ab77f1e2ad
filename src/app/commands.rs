//! Colour commands and their user-visible outcome.
//!
//! A command is the raw body of one inbound request.  Its result maps to
//! exactly one status code and one line of plain text, which the transport
//! adapter sends back unchanged.

use super::color::Rgb;
use crate::error::CommandError;

/// Outcome of [`LampService::handle_command`](super::service::LampService::handle_command).
pub type CommandResult = Result<Rgb, CommandError>;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_SERVER_ERROR: u16 = 500;

/// Response text for an unknown route.
pub const NOT_FOUND_TEXT: &str = "Not found";

/// Status code for a command outcome.
pub fn status(result: &CommandResult) -> u16 {
    match result {
        Ok(_) => STATUS_OK,
        Err(CommandError::MissingBody | CommandError::InvalidColor { .. }) => STATUS_BAD_REQUEST,
        Err(CommandError::HardwareFault { .. }) => STATUS_SERVER_ERROR,
    }
}

/// Plain-text body for a command outcome.
pub fn message(result: &CommandResult) -> String {
    match result {
        Ok(rgb) => format!("Color set to {rgb}"),
        Err(CommandError::MissingBody) => {
            String::from("Missing body: send a hex color such as #RRGGBB")
        }
        Err(CommandError::InvalidColor { input }) => {
            format!("Invalid color '{input}': expected #RRGGBB")
        }
        Err(CommandError::HardwareFault { index }) => {
            format!("Hardware fault on channel {index}")
        }
    }
}
