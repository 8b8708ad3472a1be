use crate::dataset::available_years;
use crate::domain::{DirectionMode, FlowEdge, PartnerAggregate, TradeRecord, Truncation};
use crate::trade::aggregate::{aggregate, max_partner_value, trading_countries};
use crate::trade::coords::CoordinateTable;
use crate::trade::flows::build_flows;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Partner fan-out with and without a hovered country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowCounts {
    pub hoverless: Truncation,
    pub hovered: Truncation,
}

impl Default for ShowCounts {
    fn default() -> Self {
        Self {
            hoverless: Truncation::Top(2),
            hovered: Truncation::Top(10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionState {
    pub hovered_country: Option<String>,
    pub hovered_edge: Option<(String, String)>,
    pub direction_mode: DirectionMode,
    pub truncation: Truncation,
}

impl InteractionState {
    pub const fn overview(direction_mode: DirectionMode, counts: ShowCounts) -> Self {
        Self {
            hovered_country: None,
            hovered_edge: None,
            direction_mode,
            truncation: counts.hoverless,
        }
    }

    pub fn phase(&self) -> InteractionPhase {
        match (&self.hovered_country, &self.hovered_edge) {
            (Some(country), Some((exporter, importer))) => InteractionPhase::EdgeHovered {
                country: country.clone(),
                exporter: exporter.clone(),
                importer: importer.clone(),
            },
            (Some(country), None) => InteractionPhase::CountryHovered(country.clone()),
            (None, _) => InteractionPhase::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    CountryHovered(String),
    EdgeHovered {
        country: String,
        exporter: String,
        importer: String,
    },
}

impl fmt::Display for InteractionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::CountryHovered(country) => write!(f, "CountryHovered({country})"),
            Self::EdgeHovered {
                exporter, importer, ..
            } => write!(f, "EdgeHovered({exporter} -> {importer})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    PointerEnter(String),
    PointerLeave,
    PointerEnterEdge { exporter: String, importer: String },
    PointerLeaveEdge,
    ModeToggle,
    YearChange(i32),
}

impl fmt::Display for InteractionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointerEnter(country) => write!(f, "PointerEnter({country})"),
            Self::PointerLeave => write!(f, "PointerLeave"),
            Self::PointerEnterEdge { exporter, importer } => {
                write!(f, "PointerEnterEdge({exporter} -> {importer})")
            }
            Self::PointerLeaveEdge => write!(f, "PointerLeaveEdge"),
            Self::ModeToggle => write!(f, "ModeToggle"),
            Self::YearChange(year) => write!(f, "YearChange({year})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transition from {from} with event {event}")]
pub struct TransitionError {
    pub from: InteractionPhase,
    pub event: InteractionEvent,
}

/// Which recomputation a transition asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recompute {
    None,
    Focus,
    Overview,
}

/// The outcome of applying one event to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: InteractionState,
    pub recompute: Recompute,
    pub year: Option<i32>,
}

/// Pure transition function: the next state for `event`, or an error for
/// events that make no sense in the current phase.
pub fn next_state(
    state: &InteractionState,
    event: &InteractionEvent,
    counts: ShowCounts,
) -> Result<Transition, TransitionError> {
    let overview = |mode| InteractionState::overview(mode, counts);

    match (state.phase(), event) {
        (_, InteractionEvent::PointerEnter(country)) => Ok(Transition {
            state: InteractionState {
                hovered_country: Some(country.clone()),
                hovered_edge: None,
                direction_mode: state.direction_mode,
                truncation: counts.hovered,
            },
            recompute: Recompute::Focus,
            year: None,
        }),
        (
            InteractionPhase::CountryHovered(_) | InteractionPhase::EdgeHovered { .. },
            InteractionEvent::PointerLeave,
        ) => Ok(Transition {
            state: overview(state.direction_mode),
            recompute: Recompute::Overview,
            year: None,
        }),
        (
            InteractionPhase::CountryHovered(_) | InteractionPhase::EdgeHovered { .. },
            InteractionEvent::PointerEnterEdge { exporter, importer },
        ) => Ok(Transition {
            state: InteractionState {
                hovered_edge: Some((exporter.clone(), importer.clone())),
                ..state.clone()
            },
            recompute: Recompute::None,
            year: None,
        }),
        (InteractionPhase::EdgeHovered { .. }, InteractionEvent::PointerLeaveEdge) => {
            Ok(Transition {
                state: InteractionState {
                    hovered_edge: None,
                    ..state.clone()
                },
                recompute: Recompute::None,
                year: None,
            })
        }
        (_, InteractionEvent::ModeToggle) => Ok(Transition {
            state: overview(state.direction_mode.toggled()),
            recompute: Recompute::Overview,
            year: None,
        }),
        (_, InteractionEvent::YearChange(year)) => Ok(Transition {
            state: overview(state.direction_mode),
            recompute: Recompute::Overview,
            year: Some(*year),
        }),
        (from, event) => Err(TransitionError {
            from,
            event: event.clone(),
        }),
    }
}

type StateListener = Box<dyn FnMut(&TradeController)>;

/// Owns the interaction state and the derived aggregates and flow edges
/// for the selected year. All recomputation happens synchronously inside
/// [`Self::dispatch`].
pub struct TradeController {
    records: Vec<TradeRecord>,
    years: Vec<i32>,
    year: Option<i32>,
    working_set: Vec<TradeRecord>,
    table: CoordinateTable,
    counts: ShowCounts,
    state: InteractionState,
    aggregates: Vec<PartnerAggregate>,
    edges: Vec<FlowEdge>,
    listeners: Vec<StateListener>,
}

impl fmt::Debug for TradeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradeController")
            .field("year", &self.year)
            .field("records", &self.records.len())
            .field("working_set", &self.working_set.len())
            .field("state", &self.state)
            .field("aggregates", &self.aggregates.len())
            .field("edges", &self.edges.len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl TradeController {
    /// Builds the controller in the overview state. Without an explicit
    /// year the latest year in `records` is selected.
    pub fn new(
        records: Vec<TradeRecord>,
        table: CoordinateTable,
        counts: ShowCounts,
        mode: DirectionMode,
        year: Option<i32>,
    ) -> Self {
        let years = available_years(&records);
        let year = year.or_else(|| years.last().copied());

        let mut controller = Self {
            records,
            years,
            year,
            working_set: Vec::new(),
            table,
            counts,
            state: InteractionState::overview(mode, counts),
            aggregates: Vec::new(),
            edges: Vec::new(),
            listeners: Vec::new(),
        };
        controller.select_working_set();
        controller.recompute();
        controller
    }

    /// Applies one UI event. Rejected events leave the state untouched.
    pub fn dispatch(&mut self, event: InteractionEvent) -> Result<(), TransitionError> {
        let transition = next_state(&self.state, &event, self.counts).inspect_err(|error| {
            debug!(%error, "ignoring interaction event");
        })?;

        debug!(
            %event,
            from = %self.state.phase(),
            to = %transition.state.phase(),
            "interaction transition"
        );

        self.state = transition.state;
        if let Some(year) = transition.year {
            self.year = Some(year);
            self.select_working_set();
        }
        if transition.recompute != Recompute::None {
            self.recompute();
        }

        self.notify();
        Ok(())
    }

    pub fn hover(&mut self, country: &str) -> Result<(), TransitionError> {
        self.dispatch(InteractionEvent::PointerEnter(country.to_string()))
    }

    pub fn unhover(&mut self) -> Result<(), TransitionError> {
        self.dispatch(InteractionEvent::PointerLeave)
    }

    pub fn hover_edge(&mut self, exporter: &str, importer: &str) -> Result<(), TransitionError> {
        self.dispatch(InteractionEvent::PointerEnterEdge {
            exporter: exporter.to_string(),
            importer: importer.to_string(),
        })
    }

    pub fn unhover_edge(&mut self) -> Result<(), TransitionError> {
        self.dispatch(InteractionEvent::PointerLeaveEdge)
    }

    pub fn toggle_mode(&mut self) -> Result<(), TransitionError> {
        self.dispatch(InteractionEvent::ModeToggle)
    }

    pub fn select_year(&mut self, year: i32) -> Result<(), TransitionError> {
        self.dispatch(InteractionEvent::YearChange(year))
    }

    /// Registers a callback run once after every state change.
    pub fn on_state_change(&mut self, callback: impl FnMut(&Self) + 'static) {
        self.listeners.push(Box::new(callback));
    }

    pub fn flow_edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn aggregates(&self) -> &[PartnerAggregate] {
        &self.aggregates
    }

    pub const fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn phase(&self) -> InteractionPhase {
        self.state.phase()
    }

    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn working_set(&self) -> &[TradeRecord] {
        &self.working_set
    }

    pub const fn table(&self) -> &CoordinateTable {
        &self.table
    }

    pub const fn counts(&self) -> ShowCounts {
        self.counts
    }

    /// Upper bound of the value scale for the current edges.
    pub fn max_value(&self) -> Option<f64> {
        max_partner_value(&self.aggregates)
    }

    pub fn countries(&self) -> Vec<String> {
        trading_countries(&self.working_set)
    }

    /// The record-level detail behind the hovered edge, if any.
    pub fn hovered_flow(&self) -> Option<&FlowEdge> {
        let (exporter, importer) = self.state.hovered_edge.as_ref()?;
        self.edges
            .iter()
            .find(|edge| edge.connects(exporter, importer))
    }

    /// Summed weight of all working-set records between two countries.
    pub fn flow_weight(&self, exporter: &str, importer: &str) -> f64 {
        self.working_set
            .iter()
            .filter(|record| record.exporter == exporter && record.importer == importer)
            .map(|record| record.weight)
            .sum()
    }

    pub fn snapshot(&self) -> TradeSnapshot<'_> {
        TradeSnapshot {
            year: self.year,
            state: &self.state,
            aggregates: &self.aggregates,
            edges: &self.edges,
        }
    }

    fn select_working_set(&mut self) {
        self.working_set = match self.year {
            Some(year) => self
                .records
                .iter()
                .filter(|record| record.year == year)
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        debug!(year = ?self.year, records = self.working_set.len(), "selected working set");
    }

    fn recompute(&mut self) {
        self.aggregates = aggregate(
            &self.working_set,
            self.state.hovered_country.as_deref(),
            self.state.direction_mode,
            self.state.truncation,
        );
        self.edges = build_flows(&self.aggregates, self.state.direction_mode, &self.table);
        debug!(
            subjects = self.aggregates.len(),
            edges = self.edges.len(),
            truncation = %self.state.truncation,
            "recomputed trade flows"
        );
    }

    fn notify(&mut self) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener(self);
        }
        self.listeners = listeners;
    }
}

/// Serialisable view of the controller, used by the headless JSON output.
#[derive(Debug, Serialize)]
pub struct TradeSnapshot<'a> {
    pub year: Option<i32>,
    pub state: &'a InteractionState,
    pub aggregates: &'a [PartnerAggregate],
    pub edges: &'a [FlowEdge],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;
    use std::cell::Cell;
    use std::rc::Rc;

    fn record(year: i32, exporter: &str, importer: &str, value: f64) -> TradeRecord {
        TradeRecord {
            year,
            exporter: exporter.to_string(),
            importer: importer.to_string(),
            value,
            weight: value / 2.0,
        }
    }

    fn table() -> CoordinateTable {
        CoordinateTable::new([
            ("Brazil".to_string(), GeoPoint::new(-14.2, -51.9)),
            ("Vietnam".to_string(), GeoPoint::new(14.1, 108.3)),
            ("Germany".to_string(), GeoPoint::new(51.1, 10.4)),
            ("USA".to_string(), GeoPoint::new(37.1, -95.7)),
            ("Japan".to_string(), GeoPoint::new(36.2, 138.2)),
        ])
    }

    fn controller() -> TradeController {
        let records = vec![
            record(2020, "Brazil", "Germany", 100.0),
            record(2020, "Brazil", "USA", 50.0),
            record(2020, "Brazil", "Japan", 30.0),
            record(2020, "Vietnam", "Germany", 80.0),
            record(2020, "Vietnam", "USA", 90.0),
            record(2019, "Brazil", "Japan", 999.0),
        ];
        TradeController::new(
            records,
            table(),
            ShowCounts::default(),
            DirectionMode::Export,
            None,
        )
    }

    #[test]
    fn starts_in_overview_for_latest_year() {
        let controller = controller();

        assert_eq!(controller.year(), Some(2020));
        assert_eq!(controller.years(), &[2019, 2020]);
        assert_eq!(controller.phase(), InteractionPhase::Idle);
        assert_eq!(controller.state().truncation, Truncation::Top(2));
        assert_eq!(controller.aggregates().len(), 2);
        assert!(controller
            .aggregates()
            .iter()
            .all(|aggregate| aggregate.partners.len() <= 2));
        assert_eq!(controller.flow_edges().len(), 4);
    }

    #[test]
    fn hover_focuses_on_one_country() -> Result<(), TransitionError> {
        let mut controller = controller();
        controller.hover("Brazil")?;

        assert_eq!(
            controller.phase(),
            InteractionPhase::CountryHovered("Brazil".to_string())
        );
        assert_eq!(controller.state().truncation, Truncation::Top(10));
        assert_eq!(controller.aggregates().len(), 1);
        assert_eq!(controller.aggregates()[0].partners.len(), 3);
        assert!(controller.flow_edges().iter().all(|edge| edge.exporter == "Brazil"));
        Ok(())
    }

    #[test]
    fn unhover_returns_to_overview() -> Result<(), TransitionError> {
        let mut controller = controller();
        let overview_edges = controller.flow_edges().to_vec();

        controller.hover("Brazil")?;
        controller.unhover()?;

        assert_eq!(controller.phase(), InteractionPhase::Idle);
        assert_eq!(controller.state().hovered_country, None);
        assert_eq!(controller.state().truncation, Truncation::Top(2));
        assert_eq!(controller.flow_edges(), overview_edges.as_slice());
        Ok(())
    }

    #[test]
    fn repeated_hover_cycles_do_not_drift() -> Result<(), TransitionError> {
        let mut controller = controller();
        let initial = controller.aggregates().to_vec();

        for _ in 0..5 {
            controller.hover("Vietnam")?;
            controller.hover_edge("Vietnam", "USA")?;
            controller.unhover()?;
        }

        assert_eq!(controller.aggregates(), initial.as_slice());
        assert_eq!(controller.state().truncation, Truncation::Top(2));
        Ok(())
    }

    #[test]
    fn edge_hover_keeps_country_and_skips_recompute() -> Result<(), TransitionError> {
        let mut controller = controller();
        controller.hover("Brazil")?;
        let edges = controller.flow_edges().to_vec();

        controller.hover_edge("Brazil", "USA")?;
        assert_eq!(
            controller.phase(),
            InteractionPhase::EdgeHovered {
                country: "Brazil".to_string(),
                exporter: "Brazil".to_string(),
                importer: "USA".to_string(),
            }
        );
        assert_eq!(controller.flow_edges(), edges.as_slice());
        let hovered = controller.hovered_flow().map(|edge| edge.value);
        assert_eq!(hovered, Some(50.0));
        assert!((controller.flow_weight("Brazil", "USA") - 25.0).abs() < f64::EPSILON);

        controller.unhover_edge()?;
        assert_eq!(
            controller.phase(),
            InteractionPhase::CountryHovered("Brazil".to_string())
        );
        Ok(())
    }

    #[test]
    fn mode_toggle_resets_hover_and_recomputes() -> Result<(), TransitionError> {
        let mut controller = controller();
        controller.hover("Brazil")?;
        controller.hover_edge("Brazil", "Germany")?;

        controller.toggle_mode()?;

        let state = controller.state();
        assert_eq!(state.hovered_country, None);
        assert_eq!(state.hovered_edge, None);
        assert_eq!(state.direction_mode, DirectionMode::Import);
        assert_eq!(state.truncation, Truncation::Top(2));

        let subjects: Vec<&str> = controller
            .aggregates()
            .iter()
            .map(|aggregate| aggregate.subject.as_str())
            .collect();
        assert_eq!(subjects, vec!["Germany", "Japan", "USA"]);
        assert!(controller
            .flow_edges()
            .iter()
            .all(|edge| edge.exporter == "Brazil" || edge.exporter == "Vietnam"));
        Ok(())
    }

    #[test]
    fn year_change_swaps_the_working_set() -> Result<(), TransitionError> {
        let mut controller = controller();
        controller.hover("Brazil")?;
        controller.select_year(2019)?;

        assert_eq!(controller.year(), Some(2019));
        assert_eq!(controller.phase(), InteractionPhase::Idle);
        assert_eq!(controller.working_set().len(), 1);
        assert_eq!(controller.flow_edges().len(), 1);
        assert!((controller.flow_edges()[0].value - 999.0).abs() < f64::EPSILON);

        controller.select_year(1990)?;
        assert!(controller.working_set().is_empty());
        assert!(controller.flow_edges().is_empty());
        Ok(())
    }

    #[test]
    fn invalid_events_are_rejected_without_side_effects() {
        let mut controller = controller();
        let before = controller.state().clone();

        let error = controller.unhover().err();
        assert_eq!(
            error,
            Some(TransitionError {
                from: InteractionPhase::Idle,
                event: InteractionEvent::PointerLeave,
            })
        );
        assert!(controller.hover_edge("Brazil", "USA").is_err());
        assert!(controller.unhover_edge().is_err());
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn listeners_fire_once_per_state_change() -> Result<(), TransitionError> {
        let mut controller = controller();
        let calls = Rc::new(Cell::new(0_u32));
        let seen_edges = Rc::new(Cell::new(0_usize));

        controller.on_state_change({
            let calls = calls.clone();
            let seen_edges = seen_edges.clone();
            move |controller| {
                calls.set(calls.get() + 1);
                seen_edges.set(controller.flow_edges().len());
            }
        });

        controller.hover("Brazil")?;
        assert_eq!(calls.get(), 1);
        assert_eq!(seen_edges.get(), 3);

        controller.hover_edge("Brazil", "Japan")?;
        controller.unhover()?;
        assert_eq!(calls.get(), 3);
        assert_eq!(seen_edges.get(), 4);

        let _ = controller.unhover();
        assert_eq!(calls.get(), 3);
        Ok(())
    }

    #[test]
    fn transition_function_is_pure() {
        let counts = ShowCounts {
            hoverless: Truncation::Top(1),
            hovered: Truncation::All,
        };
        let state = InteractionState::overview(DirectionMode::Import, counts);

        let transition = next_state(
            &state,
            &InteractionEvent::PointerEnter("Japan".to_string()),
            counts,
        );

        assert_eq!(
            transition,
            Ok(Transition {
                state: InteractionState {
                    hovered_country: Some("Japan".to_string()),
                    hovered_edge: None,
                    direction_mode: DirectionMode::Import,
                    truncation: Truncation::All,
                },
                recompute: Recompute::Focus,
                year: None,
            })
        );
        assert_eq!(state.phase(), InteractionPhase::Idle);
    }

    #[test]
    fn snapshot_serialises_for_headless_output() -> Result<(), serde_json::Error> {
        let controller = controller();
        let json = serde_json::to_value(controller.snapshot())?;

        assert_eq!(json["year"], 2020);
        assert_eq!(json["state"]["direction_mode"], "export");
        assert_eq!(json["state"]["truncation"], 2);
        assert_eq!(json["edges"].as_array().map(Vec::len), Some(4));
        Ok(())
    }
}
