//! Decoded archive rows.

use exoscope_astro::Measurement;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One cell of an archive row, as it arrived.
///
/// The archive normally sends numbers, but proxies and hand-edited dumps may
/// carry numeric strings or anything else. Nothing here is rejected, including
/// numbers too large for an `f64` (`1e400`), which land in `Other`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    Other(Value),
}

impl From<Value> for RawField {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => Self::Number(v),
                None => Self::Other(Value::Number(n)),
            },
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for RawField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl RawField {
    /// Permissive numeric reading. Non-numeric values are `Missing`.
    pub fn measurement(&self) -> Measurement {
        match self {
            Self::Number(v) => Measurement::from_f64(*v),
            Self::Text(s) => Measurement::parse_str(s),
            Self::Other(_) => Measurement::Missing,
        }
    }

    /// Leading-integer reading (`"2016"`, `"2016 (est.)"`, `2016.0`).
    pub fn integer(&self) -> Option<i32> {
        match self {
            Self::Number(v) if v.is_finite() => i32::try_from(v.trunc() as i64).ok(),
            Self::Number(_) => None,
            Self::Text(s) => leading_integer(s),
            Self::Other(_) => None,
        }
    }

    /// Text value. Numbers are rendered; other JSON values are dropped.
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Number(v) => Some(v.to_string()),
            Self::Other(_) => None,
        }
    }
}

fn leading_integer(s: &str) -> Option<i32> {
    let trimmed = s.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// One `pscomppars` row. Column names match the archive.
///
/// Absent columns, JSON `null`, and unknown extra columns all decode cleanly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCatalogRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_name: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ra: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dec: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_orbsmax: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_rade: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_radj: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_bmasse: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_bmassj: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_eqt: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_dens: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub st_spectype: Option<RawField>,
    /// System distance. Parsecs in the archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sy_dist: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_orbper: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub st_teff: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub st_lum: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_insol: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_orbeccen: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl_trandep: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub st_rad: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub st_mass: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_year: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discoverymethod: Option<RawField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<RawField>,
}

impl RawCatalogRecord {
    /// Decode one row of a JSON response.
    ///
    /// Rows that are not JSON objects decode to a record with every column absent.
    pub fn from_json(value: &Value) -> Self {
        // Structs also decode from arrays positionally; rows must be objects.
        if !value.is_object() {
            tracing::debug!("Treating non-object row as empty");
            return Self::default();
        }
        match serde_json::from_value(value.clone()) {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!("Treating undecodable row as empty: {err}");
                Self::default()
            }
        }
    }

    /// The planet name (`pl_name`), if any.
    pub fn name(&self) -> Option<String> {
        text(&self.pl_name)
    }
}

pub(crate) fn measure(field: &Option<RawField>) -> Measurement {
    field.as_ref().map_or(Measurement::Missing, RawField::measurement)
}

pub(crate) fn text(field: &Option<RawField>) -> Option<String> {
    field.as_ref().and_then(RawField::text)
}

pub(crate) fn integer(field: &Option<RawField>) -> Option<i32> {
    field.as_ref().and_then(RawField::integer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_archive_row() {
        let row = json!({
            "pl_name": "Proxima Cen b",
            "ra": 217.3934657,
            "dec": -62.6761821,
            "sy_dist": 1.30119,
            "pl_eqt": 234,
            "pl_dens": null,
            "disc_year": 2016,
        });
        let record = RawCatalogRecord::from_json(&row);
        assert_eq!(record.name().as_deref(), Some("Proxima Cen b"));
        assert_eq!(measure(&record.ra), Measurement::Present(217.3934657));
        assert_eq!(measure(&record.pl_eqt), Measurement::Present(234.0));
        assert!(record.pl_dens.is_none());
        assert!(measure(&record.pl_dens).is_missing());
        assert_eq!(integer(&record.disc_year), Some(2016));
    }

    #[test]
    fn test_numeric_strings_and_junk() {
        let row = json!({
            "pl_eqt": "278",
            "pl_rade": "",
            "pl_insol": "n/a",
            "pl_dens": true,
            "pl_orbper": [365],
            "disc_year": "2019 (TESS)",
        });
        let record = RawCatalogRecord::from_json(&row);
        assert_eq!(measure(&record.pl_eqt), Measurement::Present(278.0));
        assert!(measure(&record.pl_rade).is_missing());
        assert!(measure(&record.pl_insol).is_missing());
        assert!(measure(&record.pl_dens).is_missing());
        assert!(measure(&record.pl_orbper).is_missing());
        assert_eq!(integer(&record.disc_year), Some(2019));
    }

    #[test]
    fn test_unknown_columns_ignored() {
        let row = json!({ "pl_name": "K2-18 b", "sy_snum": 1, "pl_controv_flag": 0 });
        let record = RawCatalogRecord::from_json(&row);
        assert_eq!(record.name().as_deref(), Some("K2-18 b"));
    }

    #[test]
    fn test_non_object_row_is_empty_record() {
        for row in [json!(null), json!(42), json!("row"), json!([1, 2, 3])] {
            assert_eq!(RawCatalogRecord::from_json(&row), RawCatalogRecord::default());
        }
    }

    #[test]
    fn test_out_of_range_number_is_missing() {
        let document: Value =
            serde_json::from_str(r#"{"pl_name":"bad","pl_eqt":1e400,"pl_rade":1.1}"#).unwrap();
        let record = RawCatalogRecord::from_json(&document);
        assert_eq!(record.name().as_deref(), Some("bad"));
        assert!(measure(&record.pl_eqt).is_missing());
        assert_eq!(integer(&record.pl_eqt), None);
        assert_eq!(measure(&record.pl_rade), Measurement::Present(1.1));
    }

    #[test]
    fn test_text_of_numbers_and_other_values() {
        assert_eq!(RawField::Number(2.0).text().as_deref(), Some("2"));
        assert_eq!(RawField::Other(json!({"a": 1})).text(), None);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer(" 1995"), Some(1995));
        assert_eq!(leading_integer("-12x"), Some(-12));
        assert_eq!(leading_integer("x12"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("99999999999"), None);
        assert_eq!(RawField::Number(2016.7).integer(), Some(2016));
        assert_eq!(RawField::Number(1e20).integer(), None);
    }
}
