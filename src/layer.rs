use crate::{
    candle::ChartPoint,
    surface::DrawingSurface,
    transform::{ScreenPoint, ScreenTransform},
};

/// Something the chart host drives: placed once the chart knows its
/// geometry, re-placed whenever screen locations are invalidated (rescale,
/// resize) and asked to paint on every repaint.
pub trait ChartLayer {
    fn chart_initialized(&mut self, transform: &dyn ScreenTransform);

    fn screen_locations_changed(&mut self, transform: &dyn ScreenTransform);

    fn draw(&self, surface: &mut dyn DrawingSurface);
}

/// A chart point together with where the host put it on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PointModel<P> {
    pub point: P,
    pub screen_loc: ScreenPoint,
}

impl<P> PointModel<P> {
    pub fn new(point: P, screen_loc: ScreenPoint) -> Self {
        Self { point, screen_loc }
    }
}

/// Owns a layer's points and their screen locations.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsLayer<P> {
    models: Vec<PointModel<P>>,
}

impl<P: ChartPoint + Clone> PointsLayer<P> {
    /// Points start unplaced, at the screen origin.
    pub fn new(points: Vec<P>) -> Self {
        let models = points
            .into_iter()
            .map(|point| PointModel::new(point, ScreenPoint::default()))
            .collect();

        Self { models }
    }

    pub fn models(&self) -> &[PointModel<P>] {
        &self.models
    }

    /// Re-places every point through `transform`, replacing the previous
    /// models.
    pub fn update_screen_locations(&mut self, transform: &dyn ScreenTransform) {
        self.models = self
            .models
            .iter()
            .map(|model| {
                let point = model.point.clone();
                let screen_loc = transform.model_to_screen(point.x(), point.y());
                PointModel::new(point, screen_loc)
            })
            .collect();
    }
}
