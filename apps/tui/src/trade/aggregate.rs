use crate::domain::{DirectionMode, Partner, PartnerAggregate, TradeRecord, Truncation};
use std::collections::{BTreeMap, BTreeSet};

/// Groups records by subject and partner, ranks partners and truncates.
///
/// Partners are ordered by descending summed value with ties broken by
/// ascending name, so the output is fully determined by the inputs. Without
/// a subject filter every subject is returned, in ascending name order.
pub fn aggregate(
    records: &[TradeRecord],
    subject: Option<&str>,
    mode: DirectionMode,
    truncation: Truncation,
) -> Vec<PartnerAggregate> {
    let mut groups: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();

    for record in records {
        let (record_subject, partner) = mode.subject_and_partner(record);
        if subject.is_some_and(|wanted| wanted != record_subject) {
            continue;
        }
        *groups
            .entry(record_subject)
            .or_default()
            .entry(partner)
            .or_insert(0.0) += record.value;
    }

    groups
        .into_iter()
        .map(|(subject, totals)| PartnerAggregate {
            subject: subject.to_string(),
            partners: rank_partners(totals, truncation),
        })
        .collect()
}

fn rank_partners(totals: BTreeMap<&str, f64>, truncation: Truncation) -> Vec<Partner> {
    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    if let Some(limit) = truncation.limit() {
        ranked.truncate(limit);
    }

    ranked
        .into_iter()
        .map(|(name, total_value)| Partner {
            name: name.to_string(),
            total_value,
        })
        .collect()
}

/// Largest partner total across all aggregates; the renderer's scale domain.
pub fn max_partner_value(aggregates: &[PartnerAggregate]) -> Option<f64> {
    aggregates
        .iter()
        .flat_map(|aggregate| aggregate.partners.iter())
        .map(|partner| partner.total_value)
        .max_by(f64::total_cmp)
}

/// Every country that appears on either side of a record, sorted.
pub fn trading_countries(records: &[TradeRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| [record.exporter.as_str(), record.importer.as_str()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
