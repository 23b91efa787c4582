use std::{error::Error, io};

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{canvas::Canvas, Paragraph},
};

use tui_candlestick_layer::{
    Candle, CandleStickLayer, CandleStickStyle, CanvasSurface, ChartAxes, ChartLayer, LinearAxis,
};

/// Drives a [`CandleStickLayer`] by hand: placed on the first frame, placed
/// again whenever the terminal is resized.
struct App {
    layer: CandleStickLayer,
    marker: Marker,
    placed_in: Option<Rect>,
}

impl App {
    fn new() -> Self {
        let candles = vec![
            Candle::new(1703656020000, 42366.00, 42391.10, 42366.00, 42391.10),
            Candle::new(1703656080000, 42391.10, 42420.00, 42391.09, 42419.99),
            Candle::new(1703656140000, 42420.00, 42429.02, 42414.12, 42429.02),
            Candle::new(1703656200000, 42429.01, 42441.49, 42424.52, 42426.01),
            Candle::new(1703656260000, 42426.01, 42426.01, 42414.36, 42417.98),
            Candle::new(1703656320000, 42417.99, 42441.10, 42415.00, 42441.10),
            Candle::new(1703656380000, 42441.09, 42448.07, 42440.00, 42441.24),
            Candle::new(1703656440000, 42441.24, 42448.07, 42441.23, 42446.62),
            Candle::new(1703656500000, 42446.61, 42449.99, 42432.00, 42432.00),
            Candle::new(1703656560000, 42432.00, 42432.01, 42411.10, 42413.33),
            Candle::new(1703656620000, 42413.33, 42441.67, 42406.01, 42436.01),
            Candle::new(1703656680000, 42436.01, 42436.01, 42425.58, 42427.64),
            Candle::new(1703656740000, 42427.64, 42458.24, 42427.63, 42454.27),
            Candle::new(1703656800000, 42454.28, 42461.65, 42453.04, 42458.83),
            Candle::new(1703656860000, 42458.83, 42470.01, 42458.83, 42470.01),
            Candle::new(1703656920000, 42470.01, 42485.00, 42470.00, 42474.71),
        ];
        let style = CandleStickStyle::default()
            .item_width(3.)
            .bullish_color(Color::Green)
            .bearish_color(Color::Red);

        Self {
            layer: CandleStickLayer::new(candles, style),
            marker: Marker::Block,
            placed_in: None,
        }
    }

    fn toggle_marker(&mut self) {
        self.marker = match self.marker {
            Marker::Block => Marker::Braille,
            _ => Marker::Block,
        };
    }

    fn axes(&self, area: Rect) -> ChartAxes {
        let models = self.layer.points().models();
        let first = models.first().map_or(0., |m| m.point.timestamp as f64);
        let last = models.last().map_or(1., |m| m.point.timestamp as f64);
        let low = models.iter().map(|m| m.point.low).min().map_or(0., |v| *v);
        let high = models.iter().map(|m| m.point.high).max().map_or(1., |v| *v);

        let right = f64::from(area.width.saturating_sub(1));
        let bottom = f64::from(area.height.saturating_sub(1));
        ChartAxes::new(
            LinearAxis::new(first, last, 2., right - 2.),
            LinearAxis::new(low, high, bottom, 0.),
        )
    }

    fn place(&mut self, area: Rect) {
        if self.placed_in == Some(area) {
            return;
        }

        let axes = self.axes(area);
        match self.placed_in {
            None => self.layer.chart_initialized(&axes),
            Some(_) => self.layer.screen_locations_changed(&axes),
        }
        self.placed_in = Some(area);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new());

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        // resize events fall through and redraw
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('m') => app.toggle_marker(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.size());
    let area = chunks[0];

    app.place(area);

    let x_bounds = [0., f64::from(area.width.saturating_sub(1))];
    let bottom = f64::from(area.height.saturating_sub(1));
    // braille packs two points per cell across
    let fill_step = match app.marker {
        Marker::Braille => 0.5,
        _ => 1.,
    };

    let layer = &app.layer;
    let canvas = Canvas::default()
        .marker(app.marker)
        .x_bounds(x_bounds)
        .y_bounds([0., bottom])
        .paint(|ctx| {
            let mut surface = CanvasSurface::new(ctx, x_bounds, bottom).fill_step(fill_step);
            layer.draw(&mut surface);
        });
    f.render_widget(canvas, area);

    let help = format!(
        " {} candles, {:?} marker | m: switch marker, q: quit",
        layer.items().len(),
        app.marker
    );
    f.render_widget(Paragraph::new(help), chunks[1]);
}
