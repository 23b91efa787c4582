use itertools::{Itertools, MinMaxResult};
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style, Styled},
    symbols::Marker,
    widgets::{canvas::Canvas, Widget},
};

use crate::{
    candle::Candle,
    candlestick_layer::CandleStickLayer,
    layer::ChartLayer,
    style::CandleStickStyle,
    surface::CanvasSurface,
    transform::{ChartAxes, LinearAxis},
};

/// Terminal widget hosting a [`CandleStickLayer`].
///
/// Screen units are canvas grid points: one per cell with [`Marker::Block`],
/// finer with braille or half blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleStickChart {
    /// Widget style
    style: Style,
    /// Candle appearance
    candle_style: CandleStickStyle,
    /// Canvas marker
    marker: Marker,
    /// Candle data
    candles: Vec<Candle>,
}

impl Default for CandleStickChart {
    fn default() -> Self {
        Self {
            style: Style::default(),
            candle_style: CandleStickStyle::default()
                .item_width(1.)
                .bullish_color(Color::Green)
                .bearish_color(Color::Red),
            marker: Marker::Block,
            candles: Vec::new(),
        }
    }
}

impl CandleStickChart {
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn candle_style(mut self, candle_style: CandleStickStyle) -> Self {
        self.candle_style = candle_style;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn candles(mut self, candles: Vec<Candle>) -> Self {
        self.candles = candles;
        self
    }

    /// First to last timestamp across the width, keeping half a body of
    /// margin on both sides. Lowest low to highest high across the height,
    /// largest values on top. Non-finite prices are left out of the range.
    fn axes(&self, width: f64, height: f64) -> Option<ChartAxes> {
        let right = width - 1.;
        let half = self.candle_style.item_width / 2.;

        let x_axis = match self.candles.iter().map(|c| c.timestamp).minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(t) => {
                let t = t as f64;
                LinearAxis::new(t - 1., t + 1., 0., right)
            }
            MinMaxResult::MinMax(first, last) if first == last => {
                let t = first as f64;
                LinearAxis::new(t - 1., t + 1., 0., right)
            }
            MinMaxResult::MinMax(first, last) => {
                LinearAxis::new(first as f64, last as f64, half, right - half)
            }
        };

        let y_axis = match self
            .candles
            .iter()
            .flat_map(|c| [c.low, c.high])
            .filter(|v| v.is_finite())
            .minmax()
        {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(v) => LinearAxis::new(*v - 1., *v + 1., height - 1., 0.),
            MinMaxResult::MinMax(min, max) if min == max => {
                LinearAxis::new(*min - 1., *max + 1., height - 1., 0.)
            }
            MinMaxResult::MinMax(min, max) => LinearAxis::new(*min, *max, height - 1., 0.),
        };

        Some(ChartAxes::new(x_axis, y_axis))
    }
}

impl Styled for CandleStickChart {
    type Item = CandleStickChart;

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(self, style: Style) -> Self::Item {
        self.style(style)
    }
}

impl Widget for CandleStickChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);

        if self.candles.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let Some(axes) = self.axes(f64::from(area.width), f64::from(area.height)) else {
            tracing::debug!("no finite prices to chart");
            return;
        };

        let mut layer = CandleStickLayer::new(self.candles, self.candle_style);
        layer.chart_initialized(&axes);

        let x_bounds = [0., f64::from(area.width - 1)];
        let bottom = f64::from(area.height - 1);
        Canvas::default()
            .background_color(self.style.bg.unwrap_or(Color::Reset))
            .marker(self.marker)
            .x_bounds(x_bounds)
            .y_bounds([0., bottom])
            .paint(|ctx| {
                let mut surface = CanvasSurface::new(ctx, x_bounds, bottom);
                layer.draw(&mut surface);
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::ops::RangeInclusive;

    use ratatui::{
        buffer::Buffer,
        layout::Rect,
        style::{Color, Stylize},
        widgets::Widget,
    };

    use crate::{Candle, CandleStickChart, CandleStickStyle};

    fn render(widget: CandleStickChart, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer
    }

    fn column(buffer: &Buffer, x: u16) -> Vec<Option<Color>> {
        (0..buffer.area.height)
            .map(|y| {
                let cell = buffer.get(x, y);
                (cell.symbol() != " ").then_some(cell.fg)
            })
            .collect()
    }

    fn painted(rows: RangeInclusive<u16>, height: u16, color: Color) -> Vec<Option<Color>> {
        (0..height)
            .map(|y| rows.contains(&y).then_some(color))
            .collect()
    }

    #[test]
    fn empty_chart() {
        let buffer = render(CandleStickChart::default(), 5, 5);
        assert_eq!(buffer, Buffer::empty(buffer.area));
    }

    #[test]
    fn two_candles() {
        let widget = CandleStickChart::default()
            .candle_style(
                CandleStickStyle::default()
                    .item_width(2.)
                    .bullish_color(Color::Green)
                    .bearish_color(Color::Red),
            )
            .candles(vec![
                Candle::new(0, 2., 9., 0., 7.),
                Candle::new(1, 7., 8., 1., 3.),
            ]);
        let buffer = render(widget, 11, 10);

        assert_eq!(column(&buffer, 1), painted(0..=9, 10, Color::Green));
        assert_eq!(column(&buffer, 0), painted(2..=7, 10, Color::Green));
        assert_eq!(column(&buffer, 2), painted(2..=7, 10, Color::Green));

        assert_eq!(column(&buffer, 9), painted(1..=8, 10, Color::Red));
        assert_eq!(column(&buffer, 8), painted(2..=6, 10, Color::Red));
        assert_eq!(column(&buffer, 10), painted(2..=6, 10, Color::Red));

        for x in 3..=7 {
            assert_eq!(column(&buffer, x), vec![None; 10], "column {x}");
        }
    }

    #[test]
    fn single_candle_is_centered() {
        let widget = CandleStickChart::default()
            .candle_style(CandleStickStyle::default().item_width(2.))
            .candles(vec![Candle::new(1, 1., 3., 0., 2.)]);
        let buffer = render(widget, 5, 4);

        assert_eq!(column(&buffer, 2), painted(0..=3, 4, Color::Black));
        assert_eq!(column(&buffer, 1), painted(1..=2, 4, Color::Black));
        assert_eq!(column(&buffer, 3), painted(1..=2, 4, Color::Black));
        for x in [0, 4] {
            assert_eq!(column(&buffer, x), vec![None; 4], "column {x}");
        }
    }

    #[test]
    fn wide_bodies_fill_the_visible_columns() {
        let widget = CandleStickChart::default()
            .candle_style(
                CandleStickStyle::default()
                    .item_width(1e8)
                    .bullish_color(Color::Green)
                    .bearish_color(Color::Red),
            )
            .candles(vec![
                Candle::new(0, 1., 4., 0., 3.),
                Candle::new(1, 3., 4., 0., 1.),
            ]);
        let buffer = render(widget, 10, 5);

        for x in 0..10 {
            assert_eq!(column(&buffer, x), painted(1..=3, 5, Color::Red), "column {x}");
        }
    }

    #[test]
    fn background_follows_style() {
        let widget = CandleStickChart::default()
            .on_blue()
            .candles(vec![Candle::new(1, 1., 3., 0., 2.)]);
        let buffer = render(widget, 5, 4);

        assert_eq!(buffer.get(0, 0).bg, Color::Blue);
        assert_eq!(buffer.get(2, 0).bg, Color::Blue);
        assert_eq!(buffer.get(2, 0).fg, Color::Green);
    }

    #[test]
    fn non_finite_prices_draw_nothing() {
        let widget = CandleStickChart::default().candles(vec![Candle::new(
            1,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
        )]);
        let buffer = render(widget, 5, 4);

        assert_eq!(buffer, Buffer::empty(buffer.area));
    }
}
