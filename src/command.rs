//! Line-oriented commands for driving a controller from a terminal.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use std::str::FromStr;

use crate::color::{Color, ColorError};
use crate::controller::InteractionController;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{command}: missing argument <{arg}>")]
    MissingArg { command: &'static str, arg: &'static str },
    #[error("{command}: unexpected extra arguments")]
    ExtraArgs { command: &'static str },
    #[error("invalid number for <{arg}>: {value:?}")]
    BadNumber { arg: &'static str, value: String },
    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `color <hex>`
    Color(Color),
    /// `draw <x> <y>`
    Draw { x: u32, y: u32 },
    /// `zoom`
    ToggleZoom,
    /// `pan <x> <y>`: animate the offset.
    Pan { x: f64, y: f64 },
    /// `jump <x> <y>`: snap the offset.
    Jump { x: f64, y: f64 },
    /// `scale <z>`: animate the zoom.
    Scale(f64),
    /// `status`
    Status,
    /// `quit`
    Quit,
}

/// Whether the driver loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let command = match name.to_ascii_lowercase().as_str() {
            "color" => Self::Color(Color::parse(arg(&mut words, "color", "hex")?)?),
            "draw" => Self::Draw { x: number(&mut words, "draw", "x")?, y: number(&mut words, "draw", "y")? },
            "zoom" => Self::ToggleZoom,
            "pan" => Self::Pan { x: number(&mut words, "pan", "x")?, y: number(&mut words, "pan", "y")? },
            "jump" => Self::Jump { x: number(&mut words, "jump", "x")?, y: number(&mut words, "jump", "y")? },
            "scale" => Self::Scale(number(&mut words, "scale", "z")?),
            "status" => Self::Status,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        if words.next().is_some() {
            return Err(CommandError::ExtraArgs { command: command.name() });
        }
        Ok(command)
    }
}

impl Command {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Draw { .. } => "draw",
            Self::ToggleZoom => "zoom",
            Self::Pan { .. } => "pan",
            Self::Jump { .. } => "jump",
            Self::Scale(_) => "scale",
            Self::Status => "status",
            Self::Quit => "quit",
        }
    }

    /// Run this command against `controller`.
    pub fn execute(self, controller: &mut InteractionController) -> Flow {
        match self {
            Self::Color(color) => controller.select_color(color, true),
            Self::Draw { x, y } => controller.request_draw(x, y),
            Self::ToggleZoom => controller.toggle_zoom(),
            Self::Pan { x, y } => controller.set_target_offset(x, y),
            Self::Jump { x, y } => controller.set_offset(x, y),
            Self::Scale(zoom) => controller.set_target_zoom(zoom),
            Self::Status => {
                let size = controller.canvas_size();
                tracing::info!(
                    phase = ?controller.phase(),
                    remaining_ms = controller.remaining_cooldown_ms(),
                    color = ?controller.color().map(Color::as_str),
                    zoom = controller.zoom().current,
                    zoomed_in = controller.is_zoomed_in(),
                    width = size.width,
                    height = size.height,
                    "status"
                );
            }
            Self::Quit => return Flow::Quit,
        }
        Flow::Continue
    }
}

fn arg<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    name: &'static str,
) -> Result<&'a str, CommandError> {
    words.next().ok_or(CommandError::MissingArg { command, arg: name })
}

fn number<'a, T: FromStr>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    name: &'static str,
) -> Result<T, CommandError> {
    let raw = arg(words, command, name)?;
    raw.parse::<T>().map_err(|_| CommandError::BadNumber { arg: name, value: raw.to_owned() })
}
