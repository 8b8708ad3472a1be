use coffee_trade::config::AppConfig;
use coffee_trade::dataset::{self, DatasetError};
use coffee_trade::domain::FlowEdge;
use coffee_trade::trade::{InteractionPhase, TradeController, TransitionError};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{info, warn};

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

const MAX_SEARCH_RESULTS: usize = 12;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Dashboard,
    Search,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub status_message: String,
    pub config: AppConfig,
    pub controller: Option<TradeController>,
    pub load_error: Option<String>,
    /// Countries in the selected year that can be placed on the map.
    pub countries: Vec<String>,
    pub search_query: String,
    pub search_results: Vec<String>,
    pub search_selection: usize,
    state_changed: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            screen: AppScreen::Dashboard,
            show_help: false,
            status_message: String::new(),
            config,
            controller: None,
            load_error: None,
            countries: Vec::new(),
            search_query: String::new(),
            search_results: Vec::new(),
            search_selection: 0,
            state_changed: Rc::new(Cell::new(false)),
        }
    }

    /// Loads the dataset and coordinates and builds the controller. On
    /// failure the error is kept for the dashboard banner.
    pub async fn load_dataset(&mut self) -> Result<(), DatasetError> {
        match self.try_load().await {
            Ok(controller) => {
                self.attach(controller);
                Ok(())
            }
            Err(error) => {
                warn!(%error, path = %self.config.data_path.display(), "dataset load failed");
                self.load_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    async fn try_load(&self) -> Result<TradeController, DatasetError> {
        let records = dataset::load_records(&self.config.data_path).await?;
        let table = dataset::load_coordinates(self.config.coords_path.as_deref()).await?;

        Ok(TradeController::new(
            records,
            table,
            self.config.show_counts,
            self.config.direction_mode,
            self.config.year,
        ))
    }

    pub fn attach(&mut self, mut controller: TradeController) {
        let changed = Rc::clone(&self.state_changed);
        controller.on_state_change(move |_| changed.set(true));

        info!(
            year = ?controller.year(),
            mode = %controller.state().direction_mode,
            edges = controller.flow_edges().len(),
            "trade controller ready"
        );

        self.controller = Some(controller);
        self.load_error = None;
        self.refresh_countries();
    }

    pub fn phase(&self) -> InteractionPhase {
        self.controller
            .as_ref()
            .map_or(InteractionPhase::Idle, TradeController::phase)
    }

    pub fn hovered_country(&self) -> Option<&str> {
        self.controller
            .as_ref()?
            .state()
            .hovered_country
            .as_deref()
    }

    /// Runs one controller operation and resyncs derived UI state when the
    /// controller reports a change.
    fn with_controller(
        &mut self,
        operation: impl FnOnce(&mut TradeController) -> Result<(), TransitionError>,
    ) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        // Rejected transitions are already logged by the controller.
        if operation(controller).is_err() {
            return;
        }

        if self.state_changed.replace(false) {
            self.status_message.clear();
        }
    }

    pub fn hover_country(&mut self, country: &str) {
        self.with_controller(|controller| controller.hover(country));
    }

    pub fn hover_edge(&mut self, exporter: &str, importer: &str) {
        self.with_controller(|controller| controller.hover_edge(exporter, importer));
    }

    pub fn leave_edge(&mut self) {
        self.with_controller(TradeController::unhover_edge);
    }

    pub fn leave_country(&mut self) {
        self.with_controller(TradeController::unhover);
    }

    /// Esc: drop the hovered edge first, then the hovered country.
    pub fn leave(&mut self) {
        match self.phase() {
            InteractionPhase::EdgeHovered { .. } => self.leave_edge(),
            InteractionPhase::CountryHovered(_) => self.leave_country(),
            InteractionPhase::Idle => {}
        }
    }

    pub fn toggle_mode(&mut self) {
        self.with_controller(TradeController::toggle_mode);
        if let Some(controller) = &self.controller {
            self.status_message = format!("Showing {}", controller.state().direction_mode.label());
        }
    }

    pub fn next_year(&mut self) {
        self.step_year(true);
    }

    pub fn previous_year(&mut self) {
        self.step_year(false);
    }

    fn step_year(&mut self, forward: bool) {
        let Some(controller) = &self.controller else {
            return;
        };
        let years = controller.years();
        if years.is_empty() {
            return;
        }

        let current = controller
            .year()
            .and_then(|year| years.iter().position(|candidate| *candidate == year))
            .unwrap_or(years.len() - 1);
        let next = if forward {
            wrap_increment(current, years.len())
        } else {
            wrap_decrement(current, years.len())
        };
        let year = years[next];

        self.with_controller(|controller| controller.select_year(year));
        self.refresh_countries();
        self.status_message = format!("Year {year}");
    }

    pub fn next_country(&mut self) {
        self.step_country(true);
    }

    pub fn previous_country(&mut self) {
        self.step_country(false);
    }

    fn step_country(&mut self, forward: bool) {
        if self.countries.is_empty() {
            return;
        }

        let current = self
            .hovered_country()
            .and_then(|country| self.countries.iter().position(|name| name == country));
        let next = match (current, forward) {
            (Some(index), true) => wrap_increment(index, self.countries.len()),
            (Some(index), false) => wrap_decrement(index, self.countries.len()),
            (None, true) => 0,
            (None, false) => self.countries.len() - 1,
        };

        let country = self.countries[next].clone();
        self.hover_country(&country);
    }

    pub fn next_edge(&mut self) {
        self.step_edge(true);
    }

    pub fn previous_edge(&mut self) {
        self.step_edge(false);
    }

    fn step_edge(&mut self, forward: bool) {
        let Some(controller) = &self.controller else {
            return;
        };
        let edges = controller.flow_edges();
        if edges.is_empty() || controller.state().hovered_country.is_none() {
            return;
        }

        let current = controller
            .state()
            .hovered_edge
            .as_ref()
            .and_then(|(exporter, importer)| {
                edges
                    .iter()
                    .position(|edge| edge.connects(exporter, importer))
            });
        let next = match (current, forward) {
            (Some(index), true) => wrap_increment(index, edges.len()),
            (Some(index), false) => wrap_decrement(index, edges.len()),
            (None, true) => 0,
            (None, false) => edges.len() - 1,
        };

        let FlowEdge {
            exporter, importer, ..
        } = edges[next].clone();
        self.hover_edge(&exporter, &importer);
    }

    pub fn refresh_countries(&mut self) {
        self.countries = self.controller.as_ref().map_or_else(Vec::new, |controller| {
            controller
                .countries()
                .into_iter()
                .filter(|country| controller.table().resolve(country).is_some())
                .collect()
        });
    }

    pub fn open_search(&mut self) {
        self.screen = AppScreen::Search;
        self.search_query.clear();
        self.update_search();
    }

    pub fn close_search(&mut self) {
        self.screen = AppScreen::Dashboard;
        self.search_query.clear();
        self.search_results.clear();
        self.search_selection = 0;
    }

    /// Ranks countries against the query with skim-style fuzzy matching.
    pub fn update_search(&mut self) {
        self.search_results = rank_countries(&self.countries, &self.search_query);
        self.search_selection = 0;
    }

    pub fn confirm_search(&mut self) {
        let selected = self.search_results.get(self.search_selection).cloned();
        self.close_search();
        if let Some(country) = selected {
            self.hover_country(&country);
        }
    }

    pub fn quit(&mut self) {
        info!("quitting dashboard");
        self.running = false;
    }
}

pub fn rank_countries(countries: &[String], query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return countries.iter().take(MAX_SEARCH_RESULTS).cloned().collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &String)> = countries
        .iter()
        .filter_map(|country| {
            matcher
                .fuzzy_match(country, query)
                .map(|score| (score, country))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    scored
        .into_iter()
        .take(MAX_SEARCH_RESULTS)
        .map(|(_, country)| country.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_trade::domain::{DirectionMode, GeoPoint, TradeRecord};
    use coffee_trade::trade::{CoordinateTable, ShowCounts};

    fn record(year: i32, exporter: &str, importer: &str, value: f64) -> TradeRecord {
        TradeRecord {
            year,
            exporter: exporter.to_string(),
            importer: importer.to_string(),
            value,
            weight: 0.0,
        }
    }

    fn app() -> App {
        let table = CoordinateTable::new([
            ("Brazil".to_string(), GeoPoint::new(-14.2, -51.9)),
            ("Germany".to_string(), GeoPoint::new(51.1, 10.4)),
            ("Japan".to_string(), GeoPoint::new(36.2, 138.2)),
        ]);
        let controller = TradeController::new(
            vec![
                record(2020, "Brazil", "Germany", 100.0),
                record(2020, "Brazil", "Japan", 40.0),
                record(2020, "Brazil", "Atlantis", 10.0),
                record(2021, "Brazil", "Japan", 70.0),
            ],
            table,
            ShowCounts::default(),
            DirectionMode::Export,
            Some(2020),
        );

        let mut app = App::new(AppConfig::default());
        app.attach(controller);
        app
    }

    #[test]
    fn countries_skip_unplaceable_names() {
        let app = app();
        assert_eq!(app.countries, vec!["Brazil", "Germany", "Japan"]);
    }

    #[test]
    fn keyboard_navigation_walks_countries_and_edges() {
        let mut app = app();

        app.next_country();
        assert_eq!(app.hovered_country(), Some("Brazil"));

        app.next_edge();
        assert_eq!(
            app.phase(),
            InteractionPhase::EdgeHovered {
                country: "Brazil".to_string(),
                exporter: "Brazil".to_string(),
                importer: "Germany".to_string(),
            }
        );

        app.leave();
        assert_eq!(app.phase(), InteractionPhase::CountryHovered("Brazil".to_string()));
        app.leave();
        assert_eq!(app.phase(), InteractionPhase::Idle);

        app.previous_country();
        assert_eq!(app.hovered_country(), Some("Japan"));
    }

    #[test]
    fn year_stepping_wraps_and_refreshes_countries() {
        let mut app = app();

        app.next_year();
        assert_eq!(app.controller.as_ref().and_then(TradeController::year), Some(2021));
        assert_eq!(app.countries, vec!["Brazil", "Japan"]);

        app.next_year();
        assert_eq!(app.controller.as_ref().and_then(TradeController::year), Some(2020));
    }

    #[test]
    fn search_ranks_fuzzy_matches() {
        let countries = vec![
            "Germany".to_string(),
            "Guatemala".to_string(),
            "Japan".to_string(),
        ];
        let results = rank_countries(&countries, "gmny");
        assert_eq!(results.first().map(String::as_str), Some("Germany"));
        assert!(!results.contains(&"Japan".to_string()));
        assert_eq!(rank_countries(&countries, "  ").len(), 3);
    }

    #[test]
    fn confirming_search_hovers_the_country() {
        let mut app = app();
        app.open_search();
        app.search_query = "jap".to_string();
        app.update_search();
        app.confirm_search();

        assert_eq!(app.screen, AppScreen::Dashboard);
        assert_eq!(app.hovered_country(), Some("Japan"));
    }

    #[test]
    fn rejected_events_leave_the_app_untouched() {
        let mut app = app();
        app.leave();
        app.previous_edge();
        assert_eq!(app.phase(), InteractionPhase::Idle);
    }
}
