use ratatui::style::Color;

/// Appearance of a candlestick layer, fixed once the layer is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleStickStyle {
    /// Body width in screen units
    pub(crate) item_width: f64,
    /// Wick and outline width in screen units
    pub(crate) stroke_width: f64,
    /// Close above open
    pub(crate) bullish_color: Color,
    /// Close at or below open
    pub(crate) bearish_color: Color,
}

impl Default for CandleStickStyle {
    fn default() -> Self {
        Self {
            item_width: 10.,
            stroke_width: 1.,
            bullish_color: Color::Black,
            bearish_color: Color::White,
        }
    }
}

impl CandleStickStyle {
    pub fn item_width(mut self, item_width: f64) -> Self {
        self.item_width = item_width;
        self
    }

    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn bullish_color(mut self, color: Color) -> Self {
        self.bullish_color = color;
        self
    }

    pub fn bearish_color(mut self, color: Color) -> Self {
        self.bearish_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::CandleStickStyle;

    #[test]
    fn defaults() {
        let style = CandleStickStyle::default();
        assert_eq!(style.item_width, 10.);
        assert_eq!(style.stroke_width, 1.);
        assert_eq!(style.bullish_color, Color::Black);
        assert_eq!(style.bearish_color, Color::White);
    }

    #[test]
    fn builder() {
        let style = CandleStickStyle::default()
            .item_width(3.)
            .stroke_width(0.5)
            .bullish_color(Color::Green)
            .bearish_color(Color::Red);
        assert_eq!(style.item_width, 3.);
        assert_eq!(style.stroke_width, 0.5);
        assert_eq!(style.bullish_color, Color::Green);
        assert_eq!(style.bearish_color, Color::Red);
    }
}
