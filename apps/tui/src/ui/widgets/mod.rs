pub mod charts;
pub mod flow_map;
pub mod popup;
pub mod tables;

use coffee_trade::trade::TradeController;

/// One row of the side panel: a drawn flow, labelled from the hovered
/// country's point of view when there is one.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFlow {
    pub label: String,
    pub exporter: String,
    pub importer: String,
    pub value: f64,
    pub hovered: bool,
}

/// The current flow edges, largest first.
pub fn ranked_flows(controller: &TradeController) -> Vec<RankedFlow> {
    let state = controller.state();
    let subject = state.hovered_country.as_deref();

    let mut flows: Vec<RankedFlow> = controller
        .flow_edges()
        .iter()
        .map(|edge| {
            let label = match subject {
                Some(country) if edge.exporter == country => edge.importer.clone(),
                Some(country) if edge.importer == country => edge.exporter.clone(),
                _ => format!("{} → {}", edge.exporter, edge.importer),
            };
            let hovered = state
                .hovered_edge
                .as_ref()
                .is_some_and(|(exporter, importer)| edge.connects(exporter, importer));

            RankedFlow {
                label,
                exporter: edge.exporter.clone(),
                importer: edge.importer.clone(),
                value: edge.value,
                hovered,
            }
        })
        .collect();

    flows.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
    flows
}
