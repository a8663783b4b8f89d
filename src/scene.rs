//! Recorded draw lists
//!
//! A `DrawList` is an ordered batch of drawing operations that can be saved
//! to JSON, loaded back, and replayed onto any buffer. Tile and sprite commands
//! refer to their source image by index into the atlas slice given to
//! `replay`, since pixel data itself is never serialized here.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::display::PixelBuffer;
use crate::geometry::Rect;

/// Errors from persisting a draw list
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("draw list I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("draw list JSON invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// One drawing operation with its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Pixel {
        x: i32,
        y: i32,
        color: Color,
    },
    Row {
        start_x: i32,
        end_x: i32,
        y: i32,
        color: Color,
    },
    Col {
        x: i32,
        start_y: i32,
        end_y: i32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Circle {
        x: i32,
        y: i32,
        r: i32,
        color: Color,
    },
    Tile {
        x: i32,
        y: i32,
        atlas: usize,
        tile: Rect,
    },
    Sprite {
        x: i32,
        y: i32,
        atlas: usize,
        sprite: Rect,
    },
}

impl DrawCommand {
    /// Run this command against `dst`.
    /// Returns false if it names an atlas that was not supplied.
    pub fn apply(&self, dst: &mut PixelBuffer, atlases: &[&PixelBuffer]) -> bool {
        match *self {
            DrawCommand::Pixel { x, y, color } => dst.draw_pixel(x, y, color),
            DrawCommand::Row {
                start_x,
                end_x,
                y,
                color,
            } => dst.draw_row(start_x, end_x, y, color),
            DrawCommand::Col {
                x,
                start_y,
                end_y,
                color,
            } => dst.draw_col(x, start_y, end_y, color),
            DrawCommand::Rect { rect, color } => dst.draw_rect(rect, color),
            DrawCommand::Circle { x, y, r, color } => dst.draw_circle(x, y, r, color),
            DrawCommand::Tile { x, y, atlas, tile } => match atlases.get(atlas) {
                Some(src) => dst.draw_tile(x, y, src, tile),
                None => return false,
            },
            DrawCommand::Sprite {
                x,
                y,
                atlas,
                sprite,
            } => match atlases.get(atlas) {
                Some(src) => dst.draw_sprite(x, y, src, sprite),
                None => return false,
            },
        }
        true
    }
}

/// A named, ordered list of drawing commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawList {
    pub name: String,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every command in order onto `dst`.
    /// Commands naming a missing atlas are skipped.
    pub fn replay(&self, dst: &mut PixelBuffer, atlases: &[&PixelBuffer]) {
        debug!(
            "replaying draw list '{}' ({} commands, {} atlases)",
            self.name,
            self.commands.len(),
            atlases.len()
        );
        for (i, command) in self.commands.iter().enumerate() {
            if !command.apply(dst, atlases) {
                warn!("draw list '{}' command {} skipped: missing atlas", self.name, i);
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save draw list to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load draw list from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new("untitled")
    }
}
