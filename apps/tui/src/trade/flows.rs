use crate::domain::{DirectionMode, FlowEdge, PartnerAggregate};
use crate::trade::coords::CoordinateTable;
use tracing::debug;

/// Turns ranked partner lists into exporter → importer edges.
///
/// Pairs where either country has no coordinates are skipped. Edge order
/// follows the aggregate and partner order.
pub fn build_flows(
    aggregates: &[PartnerAggregate],
    mode: DirectionMode,
    table: &CoordinateTable,
) -> Vec<FlowEdge> {
    let mut edges = Vec::new();
    let mut dropped = 0_usize;

    for aggregate in aggregates {
        for partner in &aggregate.partners {
            let (exporter, importer) = mode.exporter_importer(&aggregate.subject, &partner.name);

            let (Some(source), Some(target)) = (table.resolve(exporter), table.resolve(importer))
            else {
                dropped += 1;
                continue;
            };

            edges.push(FlowEdge {
                source,
                target,
                value: partner.total_value,
                exporter: exporter.to_string(),
                importer: importer.to_string(),
            });
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = edges.len(), "dropped flows without coordinates");
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, Partner};

    fn table() -> CoordinateTable {
        CoordinateTable::new([
            ("Brazil".to_string(), GeoPoint::new(-14.2, -51.9)),
            ("Germany".to_string(), GeoPoint::new(51.1, 10.4)),
            ("Japan".to_string(), GeoPoint::new(36.2, 138.2)),
        ])
    }

    fn aggregate(subject: &str, partners: &[(&str, f64)]) -> PartnerAggregate {
        PartnerAggregate {
            subject: subject.to_string(),
            partners: partners
                .iter()
                .map(|(name, total_value)| Partner {
                    name: (*name).to_string(),
                    total_value: *total_value,
                })
                .collect(),
        }
    }

    #[test]
    fn export_view_points_from_subject() {
        let edges = build_flows(
            &[aggregate("Brazil", &[("Germany", 100.0), ("Japan", 40.0)])],
            DirectionMode::Export,
            &table(),
        );

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].exporter, "Brazil");
        assert_eq!(edges[0].importer, "Germany");
        assert_eq!(edges[0].source, GeoPoint::new(-14.2, -51.9));
        assert_eq!(edges[0].target, GeoPoint::new(51.1, 10.4));
        assert_eq!(edges[1].importer, "Japan");
    }

    #[test]
    fn import_view_still_points_from_exporter() {
        let edges = build_flows(
            &[aggregate("Germany", &[("Brazil", 100.0)])],
            DirectionMode::Import,
            &table(),
        );

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].exporter, "Brazil");
        assert_eq!(edges[0].importer, "Germany");
        assert_eq!(edges[0].source, GeoPoint::new(-14.2, -51.9));
        assert_eq!(edges[0].target, GeoPoint::new(51.1, 10.4));
        assert!((edges[0].value - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unresolvable_countries_are_dropped() {
        let aggregates = [
            aggregate("Brazil", &[("Atlantis", 500.0), ("Germany", 100.0)]),
            aggregate("Lemuria", &[("Japan", 10.0)]),
        ];
        let partner_count: usize = aggregates.iter().map(|a| a.partners.len()).sum();

        let edges = build_flows(&aggregates, DirectionMode::Export, &table());

        assert_eq!(edges.len(), 1);
        assert!(edges.len() <= partner_count);
        assert!(edges
            .iter()
            .all(|edge| !edge.touches("Atlantis") && !edge.touches("Lemuria")));
    }
}
