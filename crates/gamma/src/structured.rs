//! Folding coefficient draws into the structured output dataset.

use csvv_parser::GirdinBody;
use dataset::{Coord, DataArray, Dataset, Values};
use ndarray::ArrayD;
use prep_common::{PrepError, PrepResult};
use tracing::info;

use crate::sampler::sample_multivariate_normal;
use crate::{GAMMA_SHAPE, N_POLYNOMIAL_DEGREES};

/// Build the structured gamma dataset from a parsed CSVV body.
///
/// The flat coefficient vector is folded into
/// (age_cohort, degree, covarname); draws get a leading sample dimension.
/// The coordinates here are magic and need to change if the CSVV
/// structure changes.
pub fn build_gamma_dataset(
    body: &GirdinBody,
    seed: u64,
    n_samples: usize,
) -> PrepResult<Dataset> {
    let flat_len: usize = GAMMA_SHAPE.iter().product();
    if body.gamma.len() != flat_len {
        return Err(PrepError::DimensionMismatch(format!(
            "expected {} coefficients for shape {:?}, file has {}",
            flat_len,
            GAMMA_SHAPE,
            body.gamma.len()
        )));
    }

    info!(n_samples, seed, "drawing gamma samples");
    let draws = sample_multivariate_normal(&body.gamma, &body.gammavcv, n_samples, seed)?;

    let gamma_mean = ArrayD::from_shape_vec(GAMMA_SHAPE.to_vec(), body.gamma.clone())
        .map_err(|e| PrepError::DimensionMismatch(e.to_string()))?;

    let mut samples_shape = vec![n_samples];
    samples_shape.extend(GAMMA_SHAPE);
    let gamma_sampled =
        ArrayD::from_shape_vec(samples_shape, draws.into_iter().collect())
            .map_err(|e| PrepError::DimensionMismatch(e.to_string()))?;

    let mut ds = Dataset::new();
    ds.add_coord(
        "age_cohort",
        Coord::Str(vec![
            "age1".to_string(),
            "age2".to_string(),
            "age3".to_string(),
        ]),
    )?;
    ds.add_coord(
        "degree",
        Coord::Int((1..=N_POLYNOMIAL_DEGREES as i64).collect()),
    )?;
    ds.add_coord(
        "covarname",
        Coord::Str(vec![
            "1".to_string(),
            "climtas".to_string(),
            "loggdppc".to_string(),
        ]),
    )?;
    ds.add_coord("sample", Coord::Int((0..n_samples as i64).collect()))?;

    ds.add_var(
        "gamma_mean",
        DataArray::new(
            vec![
                "age_cohort".to_string(),
                "degree".to_string(),
                "covarname".to_string(),
            ],
            Values::F64(gamma_mean),
        )?,
    )?;
    ds.add_var(
        "gamma_sampled",
        DataArray::new(
            vec![
                "sample".to_string(),
                "age_cohort".to_string(),
                "degree".to_string(),
                "covarname".to_string(),
            ],
            Values::F64(gamma_sampled),
        )?,
    )?;

    Ok(ds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{N_SAMPLES, SEED};

    fn body(n: usize) -> GirdinBody {
        let gamma: Vec<f64> = (0..n).map(|i| i as f64 / 10.0).collect();
        let gammavcv: Vec<Vec<f64>> = (0..n)
            .map(|r| (0..n).map(|c| if r == c { 1.0 } else { 0.0 }).collect())
            .collect();
        GirdinBody {
            observations: 100.0,
            prednames: vec!["tas".to_string(); n],
            covarnames: vec!["1".to_string(); n],
            gamma,
            gammavcv,
            residvcv: vec![vec![0.5]],
        }
    }

    #[test]
    fn test_structured_output_shape() {
        let ds = build_gamma_dataset(&body(36), SEED, N_SAMPLES).unwrap();

        assert_eq!(ds.var("gamma_mean").unwrap().shape(), &[3, 4, 3]);
        assert_eq!(ds.var("gamma_sampled").unwrap().shape(), &[15, 3, 4, 3]);
        assert_eq!(
            ds.coord("age_cohort").unwrap().as_str_labels().unwrap(),
            &["age1", "age2", "age3"]
        );
        assert_eq!(ds.coord("degree").unwrap().len(), 4);
        assert_eq!(
            ds.coord("covarname").unwrap().as_str_labels().unwrap(),
            &["1", "climtas", "loggdppc"]
        );
        assert_eq!(ds.coord("sample").unwrap().len(), 15);
    }

    #[test]
    fn test_mean_folds_row_major() {
        let ds = build_gamma_dataset(&body(36), SEED, N_SAMPLES).unwrap();
        match &ds.var("gamma_mean").unwrap().values {
            Values::F64(a) => {
                // Flat index 0 -> [0,0,0]; flat index 35 -> [2,3,2].
                assert_eq!(a[[0, 0, 0]], 0.0);
                assert_eq!(a[[2, 3, 2]], 3.5);
                // Covarname is the fastest-varying axis.
                assert_eq!(a[[0, 0, 1]], 0.1);
            }
            _ => panic!("expected f64"),
        }
    }

    #[test]
    fn test_draws_are_deterministic() {
        let a = build_gamma_dataset(&body(36), SEED, N_SAMPLES).unwrap();
        let b = build_gamma_dataset(&body(36), SEED, N_SAMPLES).unwrap();
        assert_eq!(
            a.var("gamma_sampled").unwrap(),
            b.var("gamma_sampled").unwrap()
        );
    }

    #[test]
    fn test_wrong_coefficient_count_is_fatal() {
        assert!(matches!(
            build_gamma_dataset(&body(35), SEED, N_SAMPLES),
            Err(PrepError::DimensionMismatch(_))
        ));
    }
}
