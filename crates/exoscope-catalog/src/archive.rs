//! NASA Exoplanet Archive TAP queries.

use exoscope_config::ArchiveConfig;

use crate::record::RawCatalogRecord;

/// Columns requested from the archive, in request order.
pub const PLANET_FIELDS: &str = "pl_name,ra,dec,pl_orbsmax,pl_rade,pl_radj,pl_bmasse,pl_bmassj,pl_eqt,pl_dens,st_spectype,sy_dist,pl_orbper,st_teff,st_lum,pl_insol,pl_orbeccen,pl_trandep,st_rad,st_mass,disc_year,discoverymethod,hostname";

/// Which slice of the archive a view shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Every planet.
    All,
    /// The first `n` rows.
    Top(usize),
    /// One planet by exact name.
    Single(String),
}

impl ViewMode {
    /// Interpret a view label.
    ///
    /// `top10` is the display label of the short view and uses
    /// `config.top_limit` rows; `top<N>` asks for N rows; `single` shows
    /// `config.default_planet`. Anything unrecognized is [`ViewMode::All`].
    pub fn from_label(label: &str, config: &ArchiveConfig) -> Self {
        match label.trim() {
            "single" => Self::Single(config.default_planet.clone()),
            "top10" => Self::Top(config.top_limit),
            other => match other.strip_prefix("top").map(str::parse::<usize>) {
                Some(Ok(n)) => Self::Top(n),
                _ => {
                    if other != "all" {
                        tracing::warn!("Unknown view mode {other:?}, showing all planets");
                    }
                    Self::All
                }
            },
        }
    }

    /// Apply the view to rows that were fetched without it.
    pub fn select(&self, records: Vec<RawCatalogRecord>) -> Vec<RawCatalogRecord> {
        match self {
            Self::All => records,
            Self::Top(n) => records.into_iter().take(*n).collect(),
            Self::Single(name) => records
                .into_iter()
                .filter(|r| r.name().as_deref() == Some(name.as_str()))
                .collect(),
        }
    }
}

/// A TAP query for one view of the planetary-systems composite table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveQuery {
    pub view: ViewMode,
    pub table: String,
}

impl ArchiveQuery {
    pub fn new(view: ViewMode, config: &ArchiveConfig) -> Self {
        Self {
            view,
            table: config.table.clone(),
        }
    }

    /// The ADQL statement, space separated.
    pub fn adql(&self) -> String {
        self.clauses().join(" ")
    }

    /// Full request URL.
    ///
    /// Clauses are joined with `+` and percent-encoded, except the column list,
    /// which is sent as-is since commas are legal in a query string. A comma in
    /// a planet name stays encoded. With a proxy configured the whole archive
    /// URL is percent-encoded and appended to the proxy prefix.
    pub fn request_url(&self, config: &ArchiveConfig) -> String {
        let query = self
            .clauses()
            .into_iter()
            .map(|clause| match clause.as_str() {
                PLANET_FIELDS => clause,
                _ => urlencoding::encode(&clause).into_owned(),
            })
            .collect::<Vec<_>>()
            .join("+");
        let url = format!("{}?query={}&format=json", config.api_url, query);

        match &config.cors_proxy {
            Some(proxy) => format!("{proxy}{}", urlencoding::encode(&url)),
            None => url,
        }
    }

    fn clauses(&self) -> Vec<String> {
        let mut clauses = vec!["select".to_string()];
        if let ViewMode::Top(n) = self.view {
            clauses.push("top".to_string());
            clauses.push(n.to_string());
        }
        clauses.push(PLANET_FIELDS.to_string());
        clauses.push("from".to_string());
        clauses.push(self.table.clone());
        if let ViewMode::Single(name) = &self.view {
            clauses.push("where".to_string());
            clauses.push(format!("pl_name='{}'", name.replace('\'', "''")));
        }
        clauses
    }
}
