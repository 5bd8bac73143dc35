//! NASA NEX CMIP5 catalog definitions.
//!
//! The ensemble mixes real GCM runs with SMME surrogate "pattern" models.
//! Pattern models only exist for the projection scenarios; each one maps
//! back to the real model whose historical run it extends.

use std::collections::BTreeMap;
use std::ops::Range;

use prep_common::{PrepError, PrepResult};

/// CMIP5 models with full historical and projection runs.
pub const CMIP5_MODELS: [&str; 21] = [
    "ACCESS1-0",
    "CNRM-CM5",
    "GFDL-ESM2G",
    "MIROC-ESM",
    "MPI-ESM-MR",
    "inmcm4",
    "BNU-ESM",
    "CSIRO-Mk3-6-0",
    "GFDL-ESM2M",
    "MIROC-ESM-CHEM",
    "MRI-CGCM3",
    "CCSM4",
    "CanESM2",
    "IPSL-CM5A-LR",
    "MIROC5",
    "NorESM1-M",
    "CESM1-BGC",
    "GFDL-CM3",
    "IPSL-CM5A-MR",
    "MPI-ESM-LR",
    "bcc-csm1-1",
];

/// Surrogate pattern-model numbers available under rcp45.
const PATTERN_NUMBERS_RCP45: [u32; 11] = [1, 2, 3, 5, 6, 27, 28, 29, 30, 31, 32];

/// Surrogate pattern-model numbers available under rcp85.
const PATTERN_NUMBERS_RCP85: [u32; 12] = [1, 2, 3, 4, 5, 6, 28, 29, 30, 31, 32, 33];

/// Historical runs cover 1950 through 2005.
pub const YEAR_RANGE_HISTORICAL: Range<i32> = 1950..2006;

/// Projections cover 2006 through 2099. Not everything goes to 2100,
/// e.g. MIROC5 is only 2099.
pub const YEAR_RANGE_SCENARIO: Range<i32> = 2006..2100;

/// A variable to pull from the archive, at a pinned file version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSpec {
    pub variable_id: String,
    pub version: String,
}

/// A scenario with its year coverage and participating models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSpec {
    pub scenario_id: String,
    pub years: Range<i32>,
    pub models: Vec<String>,
}

/// Whether a model name denotes an SMME surrogate rather than a real GCM.
pub fn is_pattern_model(model: &str) -> bool {
    model.contains("pattern")
}

fn pattern_names(numbers: &[u32]) -> Vec<String> {
    numbers.iter().map(|i| format!("pattern{i}")).collect()
}

/// The full CMIP5 catalog: variables, scenarios, and the pattern-model
/// source mapping used to find matching historical runs.
#[derive(Debug, Clone)]
pub struct Cmip5Catalog {
    pub variables: Vec<VariableSpec>,
    pub scenarios: Vec<ScenarioSpec>,
    /// scenario_id -> pattern model -> real source_id.
    pattern_to_source: BTreeMap<String, BTreeMap<String, String>>,
}

impl Cmip5Catalog {
    /// The NASA NEX-GDDP BCSD ensemble used by the cleaning jobs.
    pub fn nasa_nex() -> Self {
        let variables = vec![
            VariableSpec {
                variable_id: "tas".to_string(),
                version: "1.1".to_string(),
            },
            VariableSpec {
                variable_id: "tasmin".to_string(),
                version: "1.0".to_string(),
            },
            VariableSpec {
                variable_id: "tasmax".to_string(),
                version: "1.0".to_string(),
            },
        ];

        let base_models: Vec<String> = CMIP5_MODELS.iter().map(|m| m.to_string()).collect();
        let mut rcp45_models = base_models.clone();
        rcp45_models.extend(pattern_names(&PATTERN_NUMBERS_RCP45));
        let mut rcp85_models = base_models.clone();
        rcp85_models.extend(pattern_names(&PATTERN_NUMBERS_RCP85));

        let scenarios = vec![
            ScenarioSpec {
                scenario_id: "historical".to_string(),
                years: YEAR_RANGE_HISTORICAL,
                models: base_models,
            },
            ScenarioSpec {
                scenario_id: "rcp45".to_string(),
                years: YEAR_RANGE_SCENARIO,
                models: rcp45_models,
            },
            ScenarioSpec {
                scenario_id: "rcp85".to_string(),
                years: YEAR_RANGE_SCENARIO,
                models: rcp85_models,
            },
        ];

        let rcp45_map = [
            ("pattern1", "MRI-CGCM3"),
            ("pattern2", "GFDL-ESM2G"),
            ("pattern3", "MRI-CGCM3"),
            ("pattern4", "GFDL-ESM2G"),
            ("pattern5", "MRI-CGCM3"),
            ("pattern6", "GFDL-ESM2G"),
            ("pattern27", "GFDL-CM3"),
            ("pattern28", "CanESM2"),
            ("pattern29", "GFDL-CM3"),
            ("pattern30", "CanESM2"),
            ("pattern31", "GFDL-CM3"),
            ("pattern32", "CanESM2"),
        ];
        let rcp85_map = [
            ("pattern1", "MRI-CGCM3"),
            ("pattern2", "GFDL-ESM2G"),
            ("pattern3", "MRI-CGCM3"),
            ("pattern4", "GFDL-ESM2G"),
            ("pattern5", "MRI-CGCM3"),
            ("pattern6", "GFDL-ESM2G"),
            ("pattern28", "GFDL-CM3"),
            ("pattern29", "CanESM2"),
            ("pattern30", "GFDL-CM3"),
            ("pattern31", "CanESM2"),
            ("pattern32", "GFDL-CM3"),
            ("pattern33", "CanESM2"),
        ];

        let to_map = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>()
        };
        let mut pattern_to_source = BTreeMap::new();
        pattern_to_source.insert("rcp45".to_string(), to_map(&rcp45_map));
        pattern_to_source.insert("rcp85".to_string(), to_map(&rcp85_map));

        Cmip5Catalog {
            variables,
            scenarios,
            pattern_to_source,
        }
    }

    /// Resolve the historical source_id a model maps back to.
    ///
    /// Real models are their own source; pattern models are looked up in
    /// the scenario's mapping. An unmapped pattern model is fatal.
    pub fn source_for<'a>(&'a self, scenario_id: &str, model: &'a str) -> PrepResult<&'a str> {
        if !is_pattern_model(model) {
            return Ok(model);
        }
        self.pattern_to_source
            .get(scenario_id)
            .and_then(|m| m.get(model))
            .map(String::as_str)
            .ok_or_else(|| PrepError::MissingPatternMapping {
                model: model.to_string(),
                scenario: scenario_id.to_string(),
            })
    }

    /// Verify every pattern model in every scenario has a source mapping.
    ///
    /// Run before any data is opened so a bad catalog fails fast instead of
    /// mid-way through the ensemble.
    pub fn validate(&self) -> PrepResult<()> {
        for scenario in &self.scenarios {
            for model in &scenario.models {
                self.source_for(&scenario.scenario_id, model)?;
            }
        }
        Ok(())
    }
}
