use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "coffee-trade", version, about = "Coffee trade flow dashboard")]
pub struct CliArgs {
    /// Print the current flows and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Trade dataset (.csv or .json)
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Coordinate table as {"Country": [lat, lon]} JSON
    #[arg(long, value_name = "PATH")]
    pub coords: Option<String>,

    /// Year to show (defaults to the latest in the dataset)
    #[arg(long)]
    pub year: Option<i32>,

    /// Rank exporters or importers
    #[arg(long, value_name = "export|import")]
    pub mode: Option<String>,

    /// Partners per country with nothing hovered
    #[arg(long = "overview-count", value_name = "N|all")]
    pub overview_count: Option<String>,

    /// Partners shown for the hovered country
    #[arg(long = "hover-count", value_name = "N|all")]
    pub hover_count: Option<String>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    /// Flags win over `.env` and the environment: they are written into the
    /// process environment before the config is read.
    pub fn apply_env_overrides(&self) {
        let overrides = [
            ("TRADE_DATA", self.data.clone()),
            ("COORDINATES_FILE", self.coords.clone()),
            ("TRADE_YEAR", self.year.map(|year| year.to_string())),
            ("DIRECTION_MODE", self.mode.clone()),
            ("HOVERLESS_SHOW_COUNT", self.overview_count.clone()),
            ("HOVERED_SHOW_COUNT", self.hover_count.clone()),
            ("LOG_FILE", self.log_file.clone()),
            ("LOG_LEVEL", self.debug.then(|| "debug".to_string())),
        ];

        for (variable, value) in overrides {
            if let Some(value) = value {
                std::env::set_var(variable, value);
            }
        }
    }

    /// Headless when asked to, or when stdout is not a terminal.
    pub const fn headless(&self, stdout_is_terminal: bool) -> bool {
        self.headless || self.json || !stdout_is_terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let args = CliArgs::parse_from([
            "coffee-trade",
            "--data",
            "trades.json",
            "--year",
            "2018",
            "--mode",
            "export",
            "--overview-count",
            "all",
            "--json",
        ]);

        assert_eq!(args.data.as_deref(), Some("trades.json"));
        assert_eq!(args.year, Some(2018));
        assert_eq!(args.mode.as_deref(), Some("export"));
        assert_eq!(args.overview_count.as_deref(), Some("all"));
        assert!(args.headless(true));
    }

    #[test]
    fn dashboard_needs_a_terminal() {
        let args = CliArgs::parse_from(["coffee-trade"]);
        assert!(!args.headless(true));
        assert!(args.headless(false));
    }
}
