use crate::app::state::{App, AppScreen};
use crate::ui::screens::dashboard::map_viewport;
use crate::ui::widgets::flow_map::MapViewport;
use coffee_trade::trade::{InteractionPhase, TradeController};
use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Cells are roughly twice as tall as they are wide.
const ROW_ASPECT: f64 = 2.0;
const COUNTRY_HIT_RADIUS: f64 = 1.5;
const EDGE_HIT_RADIUS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PointerTarget {
    Country(String),
    Edge { exporter: String, importer: String },
    Nothing,
}

pub fn handle_pointer(app: &mut App, mouse: MouseEvent, screen: Rect) {
    if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
        return;
    }
    if app.screen != AppScreen::Dashboard || app.show_help {
        return;
    }

    let Some(controller) = app.controller.as_ref() else {
        return;
    };
    let target = hit_test(
        controller,
        &app.countries,
        map_viewport(screen),
        mouse.column,
        mouse.row,
    );

    apply_target(app, target);
}

fn apply_target(app: &mut App, target: PointerTarget) {
    let phase = app.phase();

    match target {
        PointerTarget::Country(country) => {
            if app.hovered_country() != Some(country.as_str()) {
                app.hover_country(&country);
            } else if matches!(phase, InteractionPhase::EdgeHovered { .. }) {
                app.leave_edge();
            }
        }
        PointerTarget::Edge { exporter, importer } => {
            let already = matches!(
                &phase,
                InteractionPhase::EdgeHovered { exporter: e, importer: i, .. }
                    if *e == exporter && *i == importer
            );
            if !already {
                app.hover_edge(&exporter, &importer);
            }
        }
        PointerTarget::Nothing => {
            if phase != InteractionPhase::Idle {
                app.leave_country();
            }
        }
    }
}

fn hit_test(
    controller: &TradeController,
    countries: &[String],
    viewport: MapViewport,
    column: u16,
    row: u16,
) -> PointerTarget {
    let Some(cursor) = viewport.cell_center(column, row) else {
        return PointerTarget::Nothing;
    };

    let nearest_country = countries
        .iter()
        .filter_map(|country| {
            let point = controller.table().resolve(country)?;
            Some((country, distance(cursor, viewport.project(point))))
        })
        .filter(|(_, distance)| *distance <= COUNTRY_HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1));

    if let Some((country, _)) = nearest_country {
        return PointerTarget::Country(country.clone());
    }

    if controller.state().hovered_country.is_none() {
        return PointerTarget::Nothing;
    }

    controller
        .flow_edges()
        .iter()
        .map(|edge| {
            let start = viewport.project(edge.source);
            let end = viewport.project(edge.target);
            (edge, segment_distance(cursor, start, end))
        })
        .filter(|(_, distance)| *distance <= EDGE_HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(PointerTarget::Nothing, |(edge, _)| PointerTarget::Edge {
            exporter: edge.exporter.clone(),
            importer: edge.importer.clone(),
        })
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot((a.1 - b.1) * ROW_ASPECT)
}

fn segment_distance(point: (f64, f64), start: (f64, f64), end: (f64, f64)) -> f64 {
    let scale = |(x, y): (f64, f64)| (x, y * ROW_ASPECT);
    let (px, py) = scale(point);
    let (sx, sy) = scale(start);
    let (ex, ey) = scale(end);

    let (dx, dy) = (ex - sx, ey - sy);
    let length_squared = dx.mul_add(dx, dy * dy);
    let t = if length_squared > 0.0 {
        ((px - sx).mul_add(dx, (py - sy) * dy) / length_squared).clamp(0.0, 1.0)
    } else {
        0.0
    };

    (px - t.mul_add(dx, sx)).hypot(py - t.mul_add(dy, sy))
}
