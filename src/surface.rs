use ratatui::{
    style::Color,
    widgets::canvas::{Context, Line, Rectangle},
};

use crate::{projection::ItemRect, transform::ScreenPoint};

/// 2D drawing target for chart layers, in screen space (`y` grows downward).
pub trait DrawingSurface {
    fn set_line_width(&mut self, width: f64);
    fn stroke_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color);
    fn fill_rect(&mut self, rect: ItemRect, color: Color);
    fn stroke_rect(&mut self, rect: ItemRect, color: Color);
}

/// Draws onto a ratatui canvas.
///
/// The canvas is y-up, so every y is mirrored against `screen_bottom`, the
/// screen y that lands on the lower canvas bound. With `y_bounds` set to
/// `[0, screen_bottom]` screen and canvas share the same extent.
///
/// Fills only cover the part of a rect inside `x_bounds`, which should match
/// the canvas `x_bounds`.
///
/// A terminal grid has no notion of line thickness: the line width is kept
/// but does not change what is painted.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    x_bounds: [f64; 2],
    screen_bottom: f64,
    fill_step: f64,
    line_width: f64,
}

/// A canvas holds at most two points per cell across a `u16` wide area, more
/// fill strokes than that cannot paint anything new.
const MAX_FILL_STROKES: usize = 2 * u16::MAX as usize;

impl<'a, 'b> CanvasSurface<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, x_bounds: [f64; 2], screen_bottom: f64) -> Self {
        Self {
            ctx,
            x_bounds,
            screen_bottom,
            fill_step: 1.,
            line_width: 1.,
        }
    }

    /// Horizontal distance between the vertical strokes used to fill a rect.
    /// Non-positive or non-finite values fall back to 1.
    pub fn fill_step(mut self, fill_step: f64) -> Self {
        self.fill_step = if fill_step.is_finite() && fill_step > 0. {
            fill_step
        } else {
            1.
        };
        self
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    fn flip(&self, y: f64) -> f64 {
        self.screen_bottom - y
    }
}

impl DrawingSurface for CanvasSurface<'_, '_> {
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        // the canvas would place NaN on its first row and column
        if ![from.x, from.y, to.x, to.y].iter().all(|v| v.is_finite()) {
            tracing::trace!(?from, ?to, "skip stroking degenerate line");
            return;
        }

        let line = Line {
            x1: from.x,
            y1: self.flip(from.y),
            x2: to.x,
            y2: self.flip(to.y),
            color,
        };
        self.ctx.draw(&line);
    }

    fn fill_rect(&mut self, rect: ItemRect, color: Color) {
        if !(rect.is_finite() && rect.width >= 0.) {
            tracing::trace!(?rect, "skip filling degenerate rect");
            return;
        }

        let left = rect.x.max(self.x_bounds[0]);
        let right = (rect.x + rect.width).min(self.x_bounds[1]);
        if left > right {
            return;
        }

        let top = self.flip(rect.y);
        let bottom = self.flip(rect.y + rect.height);
        let span = right - left;
        let mut step = self.fill_step;
        let mut strokes = (span / step).floor() as usize;
        if strokes > MAX_FILL_STROKES {
            step = span / MAX_FILL_STROKES as f64;
            strokes = MAX_FILL_STROKES;
        }

        for i in 0..=strokes {
            let x = (left + i as f64 * step).min(right);
            self.ctx.draw(&Line {
                x1: x,
                y1: top,
                x2: x,
                y2: bottom,
                color,
            });
        }

        if right > left + strokes as f64 * step {
            self.ctx.draw(&Line {
                x1: right,
                y1: top,
                x2: right,
                y2: bottom,
                color,
            });
        }
    }

    fn stroke_rect(&mut self, rect: ItemRect, color: Color) {
        if !rect.is_finite() {
            tracing::trace!(?rect, "skip stroking degenerate rect");
            return;
        }

        let rectangle = Rectangle {
            x: rect.x,
            y: self.flip(rect.y + rect.height),
            width: rect.width,
            height: rect.height,
            color,
        };
        self.ctx.draw(&rectangle);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    LineWidth(f64),
    StrokeLine {
        from: ScreenPoint,
        to: ScreenPoint,
        color: Color,
    },
    FillRect {
        rect: ItemRect,
        color: Color,
    },
    StrokeRect {
        rect: ItemRect,
        color: Color,
    },
}

/// Keeps every call in order instead of painting.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn stroke_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        self.commands
            .push(DrawCommand::StrokeLine { from, to, color });
    }

    fn fill_rect(&mut self, rect: ItemRect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: ItemRect, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }
}
