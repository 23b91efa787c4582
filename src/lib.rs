use ordered_float::OrderedFloat;

mod candle;
mod candlestick_chart;
mod candlestick_layer;
mod layer;
mod projection;
mod style;
mod surface;
mod transform;

pub use candle::{Candle, ChartPoint};
pub use candlestick_chart::CandleStickChart;
pub use candlestick_layer::CandleStickLayer;
pub use layer::{ChartLayer, PointModel, PointsLayer};
pub use projection::{project_candles, CandleStickItem, ItemRect};
pub use style::CandleStickStyle;
pub use surface::{CanvasSurface, DrawCommand, DrawingSurface, RecordingSurface};
pub use transform::{ChartAxes, LinearAxis, ScreenPoint, ScreenTransform};

pub type Float = OrderedFloat<f64>;
