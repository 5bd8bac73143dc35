//! Cleaning of income, per-capita income, and population tables.

use dataset::{CombineAttrs, Coord, DataArray, Dataset, Values};
use ndarray::ArrayD;
use prep_common::{PrepError, PrepResult};
use tracing::info;

use crate::table::Table;

/// Standardize the adjusted-income dataset.
///
/// The source indexes by GEOID; downstream everything is `region`. Only
/// the scaled residual survives, renamed to `loggdppc`.
pub fn clean_income_adjusted(mut income: Dataset) -> PrepResult<Dataset> {
    income.rename_dim("GEOID", "region")?;
    let mut out = income.keep_vars(&["loggdppc_residual_scaled"])?;
    out.rename_var("loggdppc_residual_scaled", "loggdppc")?;
    Ok(out)
}

/// Load 2019 per-capita income for the valuation metric.
pub fn clean_pci(table: &Table) -> PrepResult<Dataset> {
    let regions = table.column("GEOID")?.to_vec();
    let pci = table.float_column("2019")?;

    let mut ds = Dataset::new();
    ds.add_coord("region", Coord::Str(regions))?;
    ds.add_var(
        "pci",
        DataArray::new(
            vec!["region".to_string()],
            Values::F64(ArrayD::from_shape_vec(vec![pci.len()], pci).map_err(to_dim_err)?),
        )?,
    )?;
    Ok(ds)
}

/// Clean the age-binned population table.
///
/// The source's age bins are renamed to the cohort names the projection
/// system uses; per-cohort counts are stacked over an `age_cohort`
/// dimension alongside their shares of the combined population.
pub fn clean_pop(table: &Table) -> PrepResult<Dataset> {
    const COHORTS: [(&str, &str); 3] = [
        ("pop_lt5", "age1"),
        ("pop_5-64", "age2"),
        ("pop_65+", "age3"),
    ];

    let regions = table.column("GEOID")?.to_vec();
    let n_regions = regions.len();
    let combined = table.float_column("total_tract_population")?;

    let mut pop = Vec::with_capacity(3 * n_regions);
    let mut share = Vec::with_capacity(3 * n_regions);
    for (source_name, _) in COHORTS {
        let counts = table.float_column(source_name)?;
        if counts.len() != n_regions {
            return Err(PrepError::TabularError(format!(
                "column '{}' has {} rows, expected {}",
                source_name,
                counts.len(),
                n_regions
            )));
        }
        share.extend(counts.iter().zip(&combined).map(|(c, total)| c / total));
        pop.extend(counts);
    }

    let mut ds = Dataset::new();
    ds.add_coord("region", Coord::Str(regions))?;
    ds.add_coord(
        "age_cohort",
        Coord::Str(COHORTS.iter().map(|(_, c)| c.to_string()).collect()),
    )?;

    let cohort_dims = vec!["age_cohort".to_string(), "region".to_string()];
    ds.add_var(
        "pop",
        DataArray::new(
            cohort_dims.clone(),
            Values::F64(ArrayD::from_shape_vec(vec![3, n_regions], pop).map_err(to_dim_err)?),
        )?,
    )?;
    ds.add_var(
        "pop_combined",
        DataArray::new(
            vec!["region".to_string()],
            Values::F64(
                ArrayD::from_shape_vec(vec![n_regions], combined).map_err(to_dim_err)?,
            ),
        )?,
    )?;
    ds.add_var(
        "pop_share",
        DataArray::new(
            cohort_dims,
            Values::F64(ArrayD::from_shape_vec(vec![3, n_regions], share).map_err(to_dim_err)?),
        )?,
    )?;
    Ok(ds)
}

/// Outer-join the cleaned sources on region and drop incomplete regions.
///
/// Regions with any NA are dropped so downstream impact calculations never
/// see partial records.
pub fn merge_socioeconomics(
    income: &Dataset,
    pci: &Dataset,
    pop: &Dataset,
) -> PrepResult<Dataset> {
    let merged = Dataset::merge_outer([income, pci, pop], "region", CombineAttrs::Drop)?;
    let complete = merged.dropna("region")?;
    info!(
        merged = merged.dim_len("region").unwrap_or(0),
        complete = complete.dim_len("region").unwrap_or(0),
        "joined socioeconomic sources"
    );
    Ok(complete)
}

fn to_dim_err(e: ndarray::ShapeError) -> PrepError {
    PrepError::DimensionMismatch(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income_ds() -> Dataset {
        let mut ds = Dataset::new();
        ds.add_coord(
            "GEOID",
            Coord::Str(vec!["06001".to_string(), "06002".to_string()]),
        )
        .unwrap();
        ds.add_var(
            "loggdppc_residual_scaled",
            DataArray::new(
                vec!["GEOID".to_string()],
                Values::F64(ArrayD::from_shape_vec(vec![2], vec![10.5, 11.0]).unwrap()),
            )
            .unwrap(),
        )
        .unwrap();
        ds.add_var(
            "something_else",
            DataArray::new(
                vec!["GEOID".to_string()],
                Values::F64(ArrayD::zeros(vec![2])),
            )
            .unwrap(),
        )
        .unwrap();
        ds
    }

    #[test]
    fn test_clean_income() {
        let ds = clean_income_adjusted(income_ds()).unwrap();
        assert_eq!(ds.var_names(), vec!["loggdppc"]);
        assert!(ds.coord("region").is_some());
        assert!(!ds.has_dim("GEOID"));
    }

    #[test]
    fn test_clean_pci() {
        let table =
            Table::from_str("GEOID,2018,2019\n06001,50000,52000\n06002,40000,41000\n").unwrap();
        let ds = clean_pci(&table).unwrap();
        assert_eq!(ds.var_names(), vec!["pci"]);
        match &ds.var("pci").unwrap().values {
            Values::F64(a) => assert_eq!(a[[1]], 41000.0),
            _ => panic!("expected f64"),
        }
    }

    #[test]
    fn test_clean_pop_stacks_cohorts() {
        let table = Table::from_str(
            "GEOID,total_tract_population,pop_lt5,pop_5-64,pop_65+\n\
             06001,100,10,70,20\n\
             06002,200,20,150,30\n",
        )
        .unwrap();
        let ds = clean_pop(&table).unwrap();

        assert_eq!(
            ds.coord("age_cohort").unwrap().as_str_labels().unwrap(),
            &["age1", "age2", "age3"]
        );
        match &ds.var("pop").unwrap().values {
            Values::F64(a) => {
                assert_eq!(a[[0, 0]], 10.0);
                assert_eq!(a[[2, 1]], 30.0);
            }
            _ => panic!("expected f64"),
        }
        match &ds.var("pop_share").unwrap().values {
            Values::F64(a) => {
                assert_eq!(a[[0, 0]], 0.1);
                assert_eq!(a[[1, 1]], 0.75);
            }
            _ => panic!("expected f64"),
        }
    }

    #[test]
    fn test_merge_drops_incomplete_regions() {
        let income = clean_income_adjusted(income_ds()).unwrap();
        // pci covers 06002 and an extra region income lacks.
        let pci_table = Table::from_str("GEOID,2019\n06002,41000\n06003,45000\n").unwrap();
        let pci = clean_pci(&pci_table).unwrap();
        let pop_table = Table::from_str(
            "GEOID,total_tract_population,pop_lt5,pop_5-64,pop_65+\n\
             06001,100,10,70,20\n\
             06002,200,20,150,30\n\
             06003,300,30,220,50\n",
        )
        .unwrap();
        let pop = clean_pop(&pop_table).unwrap();

        let merged = merge_socioeconomics(&income, &pci, &pop).unwrap();
        // Only 06002 has income, pci, and population.
        assert_eq!(
            merged.coord("region").unwrap().as_str_labels().unwrap(),
            &["06002"]
        );
        assert!(merged.has_var("loggdppc"));
        assert!(merged.has_var("pci"));
        assert!(merged.has_var("pop_share"));
    }
}
