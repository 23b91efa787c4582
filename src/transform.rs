/// A location in screen space. `y` grows downward.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps model coordinates to screen coordinates.
pub trait ScreenTransform {
    fn model_to_screen(&self, x: f64, y: f64) -> ScreenPoint;
}

impl<F> ScreenTransform for F
where
    F: Fn(f64, f64) -> ScreenPoint,
{
    fn model_to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        self(x, y)
    }
}

/// Linear mapping of `model_min..=model_max` onto `screen_start..=screen_end`.
///
/// The screen range may be decreasing, which is how a vertical axis puts
/// larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAxis {
    model_min: f64,
    model_max: f64,
    screen_start: f64,
    screen_end: f64,
}

impl LinearAxis {
    pub fn new(model_min: f64, model_max: f64, screen_start: f64, screen_end: f64) -> Self {
        Self {
            model_min,
            model_max,
            screen_start,
            screen_end,
        }
    }

    /// Screen units per model unit. Infinite or NaN for an empty model span.
    pub fn unit(&self) -> f64 {
        (self.screen_end - self.screen_start) / (self.model_max - self.model_min)
    }

    pub fn to_screen(&self, value: f64) -> f64 {
        self.screen_start + (value - self.model_min) * self.unit()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartAxes {
    pub x: LinearAxis,
    pub y: LinearAxis,
}

impl ChartAxes {
    pub fn new(x: LinearAxis, y: LinearAxis) -> Self {
        Self { x, y }
    }
}

impl ScreenTransform for ChartAxes {
    fn model_to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint::new(self.x.to_screen(x), self.y.to_screen(y))
    }
}
