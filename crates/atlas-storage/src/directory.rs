//! Region directory: the dimension normalizer.
//!
//! A bijection between raw region codes and canonical region names. Built
//! once at load time. Lookups of unknown codes fail with
//! `UnknownRegionError`; they are never silently dropped, since a missing
//! region would corrupt the map view without anyone noticing.

use std::path::Path;

use atlas_core::constants::{columns, tables};
use atlas_core::errors::LoadResult;
use atlas_core::{DataLoadError, FxHashMap, RegionCode, RegionName, UnknownRegionError};

/// US states, DC and Puerto Rico keyed by two-digit FIPS code. Names match
/// the `properties.NAME` key of the state boundary GeoJSON.
const US_STATE_FIPS: &[(&str, &str)] = &[
    ("01", "Alabama"),
    ("02", "Alaska"),
    ("04", "Arizona"),
    ("05", "Arkansas"),
    ("06", "California"),
    ("08", "Colorado"),
    ("09", "Connecticut"),
    ("10", "Delaware"),
    ("11", "District of Columbia"),
    ("12", "Florida"),
    ("13", "Georgia"),
    ("15", "Hawaii"),
    ("16", "Idaho"),
    ("17", "Illinois"),
    ("18", "Indiana"),
    ("19", "Iowa"),
    ("20", "Kansas"),
    ("21", "Kentucky"),
    ("22", "Louisiana"),
    ("23", "Maine"),
    ("24", "Maryland"),
    ("25", "Massachusetts"),
    ("26", "Michigan"),
    ("27", "Minnesota"),
    ("28", "Mississippi"),
    ("29", "Missouri"),
    ("30", "Montana"),
    ("31", "Nebraska"),
    ("32", "Nevada"),
    ("33", "New Hampshire"),
    ("34", "New Jersey"),
    ("35", "New Mexico"),
    ("36", "New York"),
    ("37", "North Carolina"),
    ("38", "North Dakota"),
    ("39", "Ohio"),
    ("40", "Oklahoma"),
    ("41", "Oregon"),
    ("42", "Pennsylvania"),
    ("44", "Rhode Island"),
    ("45", "South Carolina"),
    ("46", "South Dakota"),
    ("47", "Tennessee"),
    ("48", "Texas"),
    ("49", "Utah"),
    ("50", "Vermont"),
    ("51", "Virginia"),
    ("53", "Washington"),
    ("54", "West Virginia"),
    ("55", "Wisconsin"),
    ("56", "Wyoming"),
    ("72", "Puerto Rico"),
];

/// Bidirectional code ↔ canonical name mapping.
#[derive(Debug, Clone)]
pub struct RegionDirectory {
    by_code: FxHashMap<RegionCode, RegionName>,
    by_name: FxHashMap<RegionName, RegionCode>,
    /// Lower-cased name → canonical name, for lenient boundary input.
    by_folded_name: FxHashMap<String, RegionName>,
    /// Canonical names in declaration order.
    order: Vec<RegionName>,
}

impl RegionDirectory {
    /// Build from `(code, name)` pairs. Codes and names must both be unique.
    ///
    /// Error line numbers are 1-based pair positions.
    pub fn from_pairs<I, C, N>(pairs: I) -> LoadResult<Self>
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: AsRef<str>,
    {
        let mut directory = Self::empty();
        for (i, (code, name)) in pairs.into_iter().enumerate() {
            directory.insert(code.as_ref(), name.as_ref(), (i + 1) as u64)?;
        }
        Ok(directory)
    }

    /// The built-in US state directory.
    pub fn us_states() -> Self {
        let mut directory = Self::empty();
        for (code, name) in US_STATE_FIPS {
            let code = RegionCode::new(code);
            let name = RegionName::canonical(*name);
            directory.by_code.insert(code.clone(), name.clone());
            directory.by_name.insert(name.clone(), code);
            directory.by_folded_name.insert(name.as_str().to_lowercase(), name.clone());
            directory.order.push(name);
        }
        directory
    }

    /// Read a `code,name` table.
    pub fn from_csv(path: &Path) -> LoadResult<Self> {
        crate::tables::load_region_directory(path)
    }

    pub(crate) fn empty() -> Self {
        Self {
            by_code: FxHashMap::default(),
            by_name: FxHashMap::default(),
            by_folded_name: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, raw_code: &str, raw_name: &str, line: u64) -> LoadResult<()> {
        let name_text = raw_name.trim();
        if raw_code.trim().is_empty() || name_text.is_empty() {
            let column = if name_text.is_empty() {
                columns::REGION_NAME
            } else {
                columns::REGION_CODE
            };
            return Err(DataLoadError::MalformedRow {
                table: tables::REGIONS.to_string(),
                line,
                column: column.to_string(),
                reason: "empty value".to_string(),
            });
        }

        let code = RegionCode::new(raw_code);
        if self.by_code.contains_key(&code) {
            return Err(DataLoadError::DuplicateRegion {
                kind: "code".to_string(),
                value: code.to_string(),
            });
        }
        let folded = name_text.to_lowercase();
        if self.by_folded_name.contains_key(&folded) {
            return Err(DataLoadError::DuplicateRegion {
                kind: "name".to_string(),
                value: name_text.to_string(),
            });
        }

        let name = RegionName::canonical(name_text);
        self.by_code.insert(code.clone(), name.clone());
        self.by_name.insert(name.clone(), code);
        self.by_folded_name.insert(folded, name.clone());
        self.order.push(name);
        Ok(())
    }

    /// Map a raw code to its canonical name.
    pub fn canonicalize(&self, code: &RegionCode) -> Result<RegionName, UnknownRegionError> {
        self.by_code
            .get(code)
            .cloned()
            .ok_or_else(|| UnknownRegionError::Code(code.to_string()))
    }

    /// Normalize and map an unparsed code.
    pub fn canonicalize_raw(&self, raw: &str) -> Result<RegionName, UnknownRegionError> {
        self.canonicalize(&RegionCode::new(raw))
    }

    /// Reverse lookup.
    pub fn code_for(&self, name: &str) -> Option<&RegionCode> {
        self.by_name.get(name)
    }

    /// Validate a user- or table-supplied region name. Exact matches win;
    /// otherwise the comparison ignores case and surrounding whitespace.
    pub fn resolve_name(&self, raw: &str) -> Result<RegionName, UnknownRegionError> {
        if let Some((name, _)) = self.by_name.get_key_value(raw) {
            return Ok(name.clone());
        }
        self.by_folded_name
            .get(&raw.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| UnknownRegionError::Name(raw.to_string()))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Canonical names in declaration order.
    pub fn names(&self) -> &[RegionName] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
