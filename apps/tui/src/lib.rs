//! Coffee trade-flow aggregation: normalizes bilateral trade rows, ranks
//! trading partners and turns them into geo-located flow edges driven by
//! a small interaction state machine.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod logging;
pub mod trade;

pub use domain::{DirectionMode, FlowEdge, GeoPoint, Partner, PartnerAggregate, TradeRecord, Truncation};
pub use trade::{CoordinateTable, InteractionEvent, InteractionPhase, TradeController};
