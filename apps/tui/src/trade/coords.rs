use crate::domain::GeoPoint;
use crate::trade::reference::{COUNTRY_ALIASES, COUNTRY_COORDINATES};
use std::collections::BTreeMap;

/// Read-only lookup from country name to reference point.
///
/// Name variance between datasets is absorbed in two places: alias keys
/// (data, see `reference.rs`) and the fallback chain in [`Self::resolve`].
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    points: BTreeMap<String, GeoPoint>,
    lowercase_index: BTreeMap<String, String>,
}

impl CoordinateTable {
    pub fn new(entries: impl IntoIterator<Item = (String, GeoPoint)>) -> Self {
        let points: BTreeMap<String, GeoPoint> = entries.into_iter().collect();
        let mut table = Self {
            points,
            lowercase_index: BTreeMap::new(),
        };
        table.rebuild_index();
        table
    }

    /// The embedded reference table with its alias spellings.
    pub fn builtin() -> Self {
        let entries = COUNTRY_COORDINATES
            .iter()
            .map(|(name, lat, lon)| ((*name).to_string(), GeoPoint::new(*lat, *lon)));

        Self::new(entries).with_aliases(
            COUNTRY_ALIASES
                .iter()
                .map(|(alias, canonical)| ((*alias).to_string(), (*canonical).to_string())),
        )
    }

    /// Parses a `{"Country": [lat, lon]}` JSON object. Built-in aliases are
    /// added for whichever canonical names the file contains.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let points: BTreeMap<String, GeoPoint> = serde_json::from_str(json)?;
        Ok(Self::new(points).with_aliases(
            COUNTRY_ALIASES
                .iter()
                .map(|(alias, canonical)| ((*alias).to_string(), (*canonical).to_string())),
        ))
    }

    /// Adds alias keys pointing at existing entries. Aliases never shadow a
    /// real entry and aliases to unknown names are skipped.
    #[must_use]
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = (String, String)>) -> Self {
        for (alias, canonical) in aliases {
            if self.points.contains_key(&alias) {
                continue;
            }
            if let Some(point) = self.points.get(&canonical).copied() {
                self.points.insert(alias, point);
            }
        }
        self.rebuild_index();
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<GeoPoint> {
        self.points.get(name).copied()
    }

    /// Resolves a country name, trying in order: exact key, normalized key,
    /// case-insensitive normalized key. `None` means "no coordinates".
    pub fn resolve(&self, name: &str) -> Option<GeoPoint> {
        self.resolve_key(name).and_then(|key| self.get(key))
    }

    /// Like [`Self::resolve`] but returns the table key that matched.
    pub fn resolve_key(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.points.get_key_value(name) {
            return Some(key.as_str());
        }

        let normalized = normalize_country_name(name);
        if let Some((key, _)) = self.points.get_key_value(normalized.as_str()) {
            return Some(key.as_str());
        }

        self.lowercase_index
            .get(&normalized.to_lowercase())
            .map(String::as_str)
    }

    fn rebuild_index(&mut self) {
        self.lowercase_index.clear();
        // BTreeMap iteration is ordered, so on a lowercase collision the
        // lexicographically first key wins.
        for key in self.points.keys() {
            self.lowercase_index
                .entry(key.to_lowercase())
                .or_insert_with(|| key.clone());
        }
    }
}

/// Trims, collapses whitespace, drops a leading "The " and removes
/// parenthetical groups.
pub fn normalize_country_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");

    let without_article = match collapsed.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("the ") => &collapsed[4..],
        _ => collapsed.as_str(),
    };

    strip_parentheticals(without_article).trim().to_string()
}

fn strip_parentheticals(name: &str) -> String {
    let mut stripped = String::with_capacity(name.len());
    let mut rest = name;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        stripped.push_str(rest[..open].trim_end());
        rest = &rest[open + close + 1..];
    }

    stripped.push_str(rest);
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_covers_reference_data() {
        let table = CoordinateTable::builtin();
        assert!(table.len() >= COUNTRY_COORDINATES.len());

        for (name, lat, lon) in COUNTRY_COORDINATES {
            assert_eq!(table.resolve(name), Some(GeoPoint::new(*lat, *lon)), "{name}");
        }
    }

    #[test]
    fn normalization_handles_articles_whitespace_and_parentheses() {
        assert_eq!(normalize_country_name(" The   Bahamas "), "Bahamas");
        assert_eq!(normalize_country_name("the gambia"), "gambia");
        assert_eq!(normalize_country_name("Netherlands (Kingdom of)"), "Netherlands");
        assert_eq!(normalize_country_name("Korea (Rep.) (South)"), "Korea");
        assert_eq!(normalize_country_name("Theland"), "Theland");
        assert_eq!(normalize_country_name("Unclosed (paren"), "Unclosed (paren");
    }

    #[test]
    fn fallback_chain_resolves_variants() {
        let table = CoordinateTable::builtin();
        let bahamas = table.resolve("Bahamas");

        assert!(bahamas.is_some());
        assert_eq!(table.resolve(" The Bahamas "), bahamas);
        assert_eq!(table.resolve("BAHAMAS"), bahamas);
        assert_eq!(table.resolve("the   bahamas (commonwealth)"), bahamas);
        assert_eq!(table.resolve("Atlantis"), None);
        assert_eq!(table.resolve(""), None);
    }

    #[test]
    fn exact_keys_with_parentheses_match_before_normalization() {
        let table = CoordinateTable::builtin();
        assert_eq!(
            table.resolve_key("Sint Maarten (Dutch part)"),
            Some("Sint Maarten (Dutch part)")
        );
    }

    #[test]
    fn exact_match_wins_over_case_insensitive_match() {
        let table = CoordinateTable::new([
            ("Niger".to_string(), GeoPoint::new(1.0, 1.0)),
            ("NIGER".to_string(), GeoPoint::new(2.0, 2.0)),
        ]);

        assert_eq!(table.resolve("NIGER"), Some(GeoPoint::new(2.0, 2.0)));
        assert_eq!(table.resolve("niger"), Some(GeoPoint::new(2.0, 2.0)));
        assert_eq!(table.resolve_key("niger"), Some("NIGER"));
    }

    #[test]
    fn aliases_are_data_not_branches() {
        let table = CoordinateTable::builtin();
        let usa = table.resolve("United States of America");

        assert!(usa.is_some());
        assert_eq!(table.resolve("USA"), usa);
        assert_eq!(table.resolve("united states"), usa);
        assert_eq!(table.resolve("Ivory Coast"), table.resolve("Côte d'Ivoire"));
    }

    #[test]
    fn aliases_do_not_shadow_or_dangle() {
        let table = CoordinateTable::new([("Brazil".to_string(), GeoPoint::new(1.0, 2.0))])
            .with_aliases([
                ("Brasil".to_string(), "Brazil".to_string()),
                ("Brazil".to_string(), "Nowhere".to_string()),
                ("Ghost".to_string(), "Nowhere".to_string()),
            ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("Brasil"), Some(GeoPoint::new(1.0, 2.0)));
        assert_eq!(table.resolve("Ghost"), None);
    }

    #[test]
    fn json_tables_load_with_aliases() -> Result<(), serde_json::Error> {
        let table = CoordinateTable::from_json_str(
            r#"{"United States of America": [37.09, -95.71], "Brazil": [-14.2, -51.9]}"#,
        )?;

        assert_eq!(table.resolve("USA"), Some(GeoPoint::new(37.09, -95.71)));
        assert_eq!(table.resolve("Germany"), None);
        Ok(())
    }
}
