use std::io::{self, Write};

use super::draw_command::DrawCommand;

/// A 2D canvas that the fern scene is drawn onto. Coordinates are in pixels,
/// with the origin at the top-left corner and `y` increasing downward.
pub trait DrawingSurface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Erase everything that has been drawn so far.
    fn clear(&mut self);

    fn draw(&mut self, command: DrawCommand);
}

/**
 * Tally of the commands that a surface has received, broken down by kind.
 * Written out alongside each render as a diagnostic.
 */
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandCounts {
    pub background: usize,
    pub segment: usize,
    pub ellipse: usize,
    pub polygon: usize,
    pub image_rect: usize,
}

impl CommandCounts {
    pub fn record(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Background { .. } => self.background += 1,
            DrawCommand::Segment { .. } => self.segment += 1,
            DrawCommand::Ellipse { .. } => self.ellipse += 1,
            DrawCommand::Polygon { .. } => self.polygon += 1,
            DrawCommand::ImageRect { .. } => self.image_rect += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.background + self.segment + self.ellipse + self.polygon + self.image_rect
    }

    pub fn display<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "CommandCounts:  total: {}", self.total())?;
        writeln!(writer, "  background: {}", self.background)?;
        writeln!(writer, "  segment: {}", self.segment)?;
        writeln!(writer, "  ellipse: {}", self.ellipse)?;
        writeln!(writer, "  polygon: {}", self.polygon)?;
        writeln!(writer, "  image_rect: {}", self.image_rect)?;
        Ok(())
    }
}

/**
 * Surface that keeps the ordered list of commands instead of rasterizing them.
 * Useful for inspecting exactly what a render produced.
 */
#[derive(Debug, Clone)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
    width: f64,
    height: f64,
}

impl CommandRecorder {
    pub fn new(width: f64, height: f64) -> CommandRecorder {
        CommandRecorder {
            commands: Vec::new(),
            width,
            height,
        }
    }

    pub fn counts(&self) -> CommandCounts {
        let mut counts = CommandCounts::default();
        for command in self.commands.iter() {
            counts.record(command);
        }
        counts
    }
}

impl DrawingSurface for CommandRecorder {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
