//! Trade-flow pipeline: raw rows in, drawable flow edges out.

pub mod aggregate;
pub mod controller;
pub mod coords;
pub mod flows;
pub mod normalize;
mod reference;
pub mod scale;

pub use aggregate::{aggregate, max_partner_value, trading_countries};
pub use controller::{
    InteractionEvent, InteractionPhase, InteractionState, ShowCounts, TradeController,
    TradeSnapshot, TransitionError,
};
pub use coords::{normalize_country_name, CoordinateTable};
pub use flows::build_flows;
pub use normalize::{normalize_rows, normalize_rows_with_report, NormalizeReport, RawRow};
