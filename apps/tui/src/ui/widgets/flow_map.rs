use coffee_trade::domain::{FlowEdge, GeoPoint};
use coffee_trade::trade::scale::{format_value, legend_stops, stroke_weight, value_intensity};
use coffee_trade::trade::TradeController;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Map, MapResolution};
use ratatui::widgets::Block;
use ratatui::Frame;
use std::collections::BTreeSet;

const X_BOUNDS: [f64; 2] = [-180.0, 180.0];
const Y_BOUNDS: [f64; 2] = [-90.0, 90.0];
const HIGHLIGHT: Color = Color::Yellow;
const ARROW_HEAD_DEGREES: f64 = 3.0;
const STRAND_OFFSET_DEGREES: f64 = 0.6;

/// Maps terminal cells inside the map block to canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapViewport {
    pub area: Rect,
}

impl MapViewport {
    pub const fn new(area: Rect) -> Self {
        Self { area }
    }

    pub const fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }

    /// Position of a point in cell units relative to the viewport origin.
    pub fn project(&self, point: GeoPoint) -> (f64, f64) {
        let width = f64::from(self.area.width);
        let height = f64::from(self.area.height);
        let x = (point.lon - X_BOUNDS[0]) / (X_BOUNDS[1] - X_BOUNDS[0]) * width;
        let y = (Y_BOUNDS[1] - point.lat) / (Y_BOUNDS[1] - Y_BOUNDS[0]) * height;
        (x, y)
    }

    /// Centre of a terminal cell in the same units as [`Self::project`].
    pub fn cell_center(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        if !self.contains(column, row) {
            return None;
        }
        Some((
            f64::from(column - self.area.x) + 0.5,
            f64::from(row - self.area.y) + 0.5,
        ))
    }
}

/// Blues ramp for a dark terminal: stronger flows are brighter.
#[allow(clippy::cast_sign_loss)]
pub fn blues(intensity: f64) -> Color {
    const LOW: (f64, f64, f64) = (24.0, 64.0, 128.0);
    const HIGH: (f64, f64, f64) = (198.0, 225.0, 255.0);

    let t = intensity.clamp(0.0, 1.0);
    let channel = |low: f64, high: f64| (high - low).mul_add(t, low).round() as u8;
    Color::Rgb(
        channel(LOW.0, HIGH.0),
        channel(LOW.1, HIGH.1),
        channel(LOW.2, HIGH.2),
    )
}

/// Parallel strands drawn for a stroke weight in `[1, 10]`.
pub fn strand_count(weight: f64) -> usize {
    match weight {
        w if w >= 7.0 => 3,
        w if w >= 4.0 => 2,
        _ => 1,
    }
}

pub fn legend_line(max: f64) -> TextLine<'static> {
    let mut spans = vec![Span::styled(" Value ", Style::default().fg(Color::Gray))];
    for stop in legend_stops(max) {
        spans.push(Span::styled(
            "██",
            Style::default().fg(blues(value_intensity(stop, max))),
        ));
        spans.push(Span::styled(
            format!(" {} ", format_value(stop)),
            Style::default().fg(Color::Gray),
        ));
    }
    TextLine::from(spans)
}

pub fn render_flow_map(controller: &TradeController, f: &mut Frame<'_>, area: Rect, block: Block<'_>) {
    let max = controller.max_value().unwrap_or(0.0);
    let state = controller.state();
    let hovered_country = state.hovered_country.as_deref();
    let hovered_edge = state.hovered_edge.as_ref();
    let edges = controller.flow_edges();

    let block = if max > 0.0 {
        block.title_bottom(legend_line(max))
    } else {
        block
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(X_BOUNDS)
        .y_bounds(Y_BOUNDS)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();

            for edge in edges {
                let is_hovered = hovered_edge
                    .is_some_and(|(exporter, importer)| edge.connects(exporter, importer));
                if !is_hovered {
                    let color = blues(value_intensity(edge.value, max));
                    draw_arrow(ctx, edge, color, strand_count(stroke_weight(edge.value, max)));
                }
            }

            // Hovered edge last so it sits on top.
            if let Some(edge) = edges.iter().find(|edge| {
                hovered_edge.is_some_and(|(exporter, importer)| edge.connects(exporter, importer))
            }) {
                draw_arrow(ctx, edge, HIGHLIGHT, strand_count(stroke_weight(edge.value, max)));
            }
            ctx.layer();

            for (name, point) in endpoints(edges) {
                let is_hovered = hovered_country == Some(name);
                ctx.draw(&Circle {
                    x: point.lon,
                    y: point.lat,
                    radius: if is_hovered { 2.5 } else { 1.0 },
                    color: if is_hovered { HIGHLIGHT } else { Color::White },
                });
            }

            if let Some(name) = hovered_country {
                if let Some(point) = controller.table().resolve(name) {
                    ctx.print(
                        point.lon + 3.0,
                        point.lat + 3.0,
                        TextLine::styled(
                            name.to_string(),
                            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

fn endpoints(edges: &[FlowEdge]) -> Vec<(&str, GeoPoint)> {
    let mut seen = BTreeSet::new();
    let mut points = Vec::new();
    for edge in edges {
        for (name, point) in [
            (edge.exporter.as_str(), edge.source),
            (edge.importer.as_str(), edge.target),
        ] {
            if seen.insert(name) {
                points.push((name, point));
            }
        }
    }
    points
}

fn draw_arrow(ctx: &mut Context<'_>, edge: &FlowEdge, color: Color, strands: usize) {
    let (x1, y1) = (edge.source.lon, edge.source.lat);
    let (x2, y2) = (edge.target.lon, edge.target.lat);
    let (dx, dy) = (x2 - x1, y2 - y1);
    let length = dx.hypot(dy);
    if length < f64::EPSILON {
        return;
    }
    let (ux, uy) = (dx / length, dy / length);

    for strand in 0..strands {
        let offset = (strand as f64 - (strands as f64 - 1.0) / 2.0) * STRAND_OFFSET_DEGREES;
        let (ox, oy) = (-uy * offset, ux * offset);
        ctx.draw(&CanvasLine {
            x1: x1 + ox,
            y1: y1 + oy,
            x2: x2 + ox,
            y2: y2 + oy,
            color,
        });
    }

    let head = ARROW_HEAD_DEGREES.min(length / 3.0);
    let (sin, cos) = 0.45_f64.sin_cos();
    for side in [-1.0, 1.0] {
        let hx = ux.mul_add(cos, -uy * sin * side);
        let hy = uy.mul_add(cos, ux * sin * side);
        ctx.draw(&CanvasLine {
            x1: x2,
            y1: y2,
            x2: hx.mul_add(-head, x2),
            y2: hy.mul_add(-head, y2),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_projects_corners_and_centre() {
        let viewport = MapViewport::new(Rect::new(10, 5, 36, 18));

        assert_eq!(viewport.project(GeoPoint::new(90.0, -180.0)), (0.0, 0.0));
        assert_eq!(viewport.project(GeoPoint::new(-90.0, 180.0)), (36.0, 18.0));
        assert_eq!(viewport.project(GeoPoint::new(0.0, 0.0)), (18.0, 9.0));
    }

    #[test]
    fn cell_centres_are_relative_to_the_viewport() {
        let viewport = MapViewport::new(Rect::new(10, 5, 36, 18));

        assert_eq!(viewport.cell_center(10, 5), Some((0.5, 0.5)));
        assert_eq!(viewport.cell_center(45, 22), Some((35.5, 17.5)));
        assert_eq!(viewport.cell_center(9, 5), None);
        assert_eq!(viewport.cell_center(46, 5), None);
    }

    #[test]
    fn blues_brighten_with_intensity() {
        assert_eq!(blues(0.0), Color::Rgb(24, 64, 128));
        assert_eq!(blues(1.0), Color::Rgb(198, 225, 255));
        assert_eq!(blues(7.0), blues(1.0));
    }

    #[test]
    fn heavier_strokes_get_more_strands() {
        assert_eq!(strand_count(1.0), 1);
        assert_eq!(strand_count(4.0), 2);
        assert_eq!(strand_count(10.0), 3);
    }
}
