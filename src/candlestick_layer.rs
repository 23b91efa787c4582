use crate::{
    candle::Candle,
    layer::{ChartLayer, PointsLayer},
    projection::{project_candles, CandleStickItem},
    style::CandleStickStyle,
    surface::DrawingSurface,
    transform::{ScreenPoint, ScreenTransform},
};

/// Chart layer drawing one candlestick per candle.
///
/// Draw items are derived from the screen locations and rebuilt as a whole
/// each time the host places the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleStickLayer {
    points: PointsLayer<Candle>,
    style: CandleStickStyle,
    items: Vec<CandleStickItem>,
}

impl CandleStickLayer {
    pub fn new(candles: Vec<Candle>, style: CandleStickStyle) -> Self {
        Self {
            points: PointsLayer::new(candles),
            style,
            items: Vec::new(),
        }
    }

    pub fn points(&self) -> &PointsLayer<Candle> {
        &self.points
    }

    /// Items as of the last placement. Empty before the chart is initialized.
    pub fn items(&self) -> &[CandleStickItem] {
        &self.items
    }

    fn place(&mut self, transform: &dyn ScreenTransform) {
        self.points.update_screen_locations(transform);
        self.items = project_candles(self.points.models(), transform, &self.style);
        tracing::debug!(items = self.items.len(), "candlestick items rebuilt");
    }
}

impl ChartLayer for CandleStickLayer {
    fn chart_initialized(&mut self, transform: &dyn ScreenTransform) {
        self.place(transform);
    }

    fn screen_locations_changed(&mut self, transform: &dyn ScreenTransform) {
        self.place(transform);
    }

    fn draw(&self, surface: &mut dyn DrawingSurface) {
        tracing::trace!(items = self.items.len(), "drawing candlesticks");

        for item in &self.items {
            let color = item.fill_color;

            surface.set_line_width(self.style.stroke_width);
            surface.stroke_line(
                ScreenPoint::new(item.x, item.wick_top),
                ScreenPoint::new(item.x, item.rect.top()),
                color,
            );
            surface.stroke_line(
                ScreenPoint::new(item.x, item.wick_bottom),
                ScreenPoint::new(item.x, item.rect.bottom()),
                color,
            );

            surface.fill_rect(item.rect, color);
            surface.stroke_rect(item.rect, color);
        }
    }
}
