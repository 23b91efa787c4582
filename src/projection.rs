use ratatui::style::Color;

use crate::{
    candle::Candle, layer::PointModel, style::CandleStickStyle, transform::ScreenTransform,
};

/// Axis-aligned rectangle in screen space, origin at its top-left corner.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ItemRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ItemRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.
    }

    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Screen-space shape of one candle: a body plus wicks reaching the high
/// and low, all in `fill_color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleStickItem {
    pub x: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub rect: ItemRect,
    pub fill_color: Color,
}

impl CandleStickItem {
    fn new(
        x: f64,
        wick_top: f64,
        wick_bottom: f64,
        rect_top: f64,
        rect_bottom: f64,
        width: f64,
        fill_color: Color,
    ) -> Self {
        Self {
            x,
            wick_top,
            wick_bottom,
            rect: ItemRect::new(x - width / 2., rect_top, width, rect_bottom - rect_top),
            fill_color,
        }
    }

    fn is_finite(&self) -> bool {
        [self.x, self.wick_top, self.wick_bottom]
            .iter()
            .all(|v| v.is_finite())
            && self.rect.is_finite()
    }
}

/// Turns placed candles into draw items, one per candle and in order.
///
/// Screen y grows downward, so a close drawn above the open is a rise and
/// takes the bullish color. Anything else, NaN included, is bearish.
pub fn project_candles(
    models: &[PointModel<Candle>],
    transform: &dyn ScreenTransform,
    style: &CandleStickStyle,
) -> Vec<CandleStickItem> {
    let items: Vec<CandleStickItem> = models
        .iter()
        .map(|model| {
            let candle = &model.point;
            let x = model.screen_loc.x;

            let high = transform.model_to_screen(x, *candle.high).y;
            let low = transform.model_to_screen(x, *candle.low).y;
            let open = transform.model_to_screen(x, *candle.open).y;
            let close = transform.model_to_screen(x, *candle.close).y;

            let (rect_top, rect_bottom, fill_color) = if close < open {
                (close, open, style.bullish_color)
            } else {
                (open, close, style.bearish_color)
            };

            CandleStickItem::new(
                x,
                high,
                low,
                rect_top,
                rect_bottom,
                style.item_width,
                fill_color,
            )
        })
        .collect();

    let degenerate = items.iter().filter(|item| !item.is_finite()).count();
    if degenerate > 0 {
        tracing::warn!(
            degenerate,
            total = items.len(),
            "candlestick projection produced non-finite geometry"
        );
    }

    items
}
