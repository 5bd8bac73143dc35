//! GDPCIR ensemble source locations.
//!
//! Full URLs are written out explicitly because it is easier to debug.
//! We need to make "tas" so we only grab "tasmax" and "tasmin".

use crate::gdpcir::GdpcirRun;

pub const GDPCIR_TARGETS: &[GdpcirRun] = &[
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CSIRO-ARCCSS/ACCESS-CM2/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO-ARCCSS/ACCESS-CM2/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO-ARCCSS/ACCESS-CM2/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CSIRO-ARCCSS/ACCESS-CM2/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO-ARCCSS/ACCESS-CM2/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO-ARCCSS/ACCESS-CM2/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CSIRO/ACCESS-ESM1-5/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO/ACCESS-ESM1-5/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO/ACCESS-ESM1-5/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO/ACCESS-ESM1-5/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CSIRO/ACCESS-ESM1-5/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO/ACCESS-ESM1-5/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO/ACCESS-ESM1-5/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CSIRO/ACCESS-ESM1-5/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/BCC/BCC-CSM2-MR/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/BCC/BCC-CSM2-MR/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/BCC/BCC-CSM2-MR/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/BCC/BCC-CSM2-MR/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/BCC/BCC-CSM2-MR/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/BCC/BCC-CSM2-MR/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/BCC/BCC-CSM2-MR/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/BCC/BCC-CSM2-MR/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/BCC/BCC-CSM2-MR/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/BCC/BCC-CSM2-MR/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CMCC/CMCC-CM2-SR5/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-CM2-SR5/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-CM2-SR5/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-CM2-SR5/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-CM2-SR5/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CMCC/CMCC-CM2-SR5/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-CM2-SR5/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-CM2-SR5/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-CM2-SR5/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-CM2-SR5/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CMCC/CMCC-ESM2/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-ESM2/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-ESM2/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-ESM2/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-ESM2/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CMCC/CMCC-ESM2/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-ESM2/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-ESM2/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-ESM2/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CMCC/CMCC-ESM2/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CCCma/CanESM5/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CCCma/CanESM5/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CCCma/CanESM5/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CCCma/CanESM5/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CCCma/CanESM5/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CCCma/CanESM5/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CCCma/CanESM5/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CCCma/CanESM5/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CCCma/CanESM5/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CCCma/CanESM5/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3-AerChem/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-AerChem/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3-AerChem/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-AerChem/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3-CC/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-CC/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-CC/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3-CC/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-CC/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-CC/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg-LR/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3-Veg/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3-Veg/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3-Veg/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/EC-Earth-Consortium/EC-Earth3/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/EC-Earth-Consortium/EC-Earth3/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CAS/FGOALS-g3/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CAS/FGOALS-g3/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CAS/FGOALS-g3/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CAS/FGOALS-g3/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CAS/FGOALS-g3/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/CAS/FGOALS-g3/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CAS/FGOALS-g3/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CAS/FGOALS-g3/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CAS/FGOALS-g3/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/CAS/FGOALS-g3/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NOAA-GFDL/GFDL-CM4/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-CM4/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-CM4/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NOAA-GFDL/GFDL-CM4/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-CM4/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-CM4/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NOAA-GFDL/GFDL-ESM4/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-ESM4/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-ESM4/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-ESM4/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-ESM4/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NOAA-GFDL/GFDL-ESM4/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-ESM4/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-ESM4/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-ESM4/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NOAA-GFDL/GFDL-ESM4/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MOHC/HadGEM3-GC31-LL/historical/r1i1p1f3/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/HadGEM3-GC31-LL/ssp126/r1i1p1f3/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/HadGEM3-GC31-LL/ssp245/r1i1p1f3/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/HadGEM3-GC31-LL/ssp585/r1i1p1f3/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MOHC/HadGEM3-GC31-LL/historical/r1i1p1f3/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/HadGEM3-GC31-LL/ssp126/r1i1p1f3/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/HadGEM3-GC31-LL/ssp245/r1i1p1f3/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/HadGEM3-GC31-LL/ssp585/r1i1p1f3/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/INM/INM-CM4-8/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM4-8/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM4-8/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM4-8/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM4-8/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/INM/INM-CM4-8/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM4-8/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM4-8/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM4-8/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM4-8/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/INM/INM-CM5-0/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM5-0/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM5-0/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM5-0/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM5-0/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/INM/INM-CM5-0/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM5-0/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM5-0/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM5-0/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/INM/INM-CM5-0/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MIROC/MIROC-ES2L/historical/r1i1p1f2/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC-ES2L/ssp126/r1i1p1f2/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC-ES2L/ssp245/r1i1p1f2/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC-ES2L/ssp370/r1i1p1f2/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC-ES2L/ssp585/r1i1p1f2/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MIROC/MIROC-ES2L/historical/r1i1p1f2/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC-ES2L/ssp126/r1i1p1f2/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC-ES2L/ssp245/r1i1p1f2/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC-ES2L/ssp370/r1i1p1f2/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC-ES2L/ssp585/r1i1p1f2/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MIROC/MIROC6/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC6/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC6/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC6/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC6/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MIROC/MIROC6/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC6/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC6/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC6/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MIROC/MIROC6/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MPI-M/MPI-ESM1-2-HR/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/DKRZ/MPI-ESM1-2-HR/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/DKRZ/MPI-ESM1-2-HR/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MPI-M/MPI-ESM1-2-HR/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/DKRZ/MPI-ESM1-2-HR/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/DKRZ/MPI-ESM1-2-HR/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MPI-M/MPI-ESM1-2-LR/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MPI-M/MPI-ESM1-2-LR/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MPI-M/MPI-ESM1-2-LR/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MPI-M/MPI-ESM1-2-LR/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MPI-M/MPI-ESM1-2-LR/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MPI-M/MPI-ESM1-2-LR/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MPI-M/MPI-ESM1-2-LR/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MPI-M/MPI-ESM1-2-LR/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MPI-M/MPI-ESM1-2-LR/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MPI-M/MPI-ESM1-2-LR/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NUIST/NESM3/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NUIST/NESM3/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NUIST/NESM3/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NUIST/NESM3/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NUIST/NESM3/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NUIST/NESM3/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NUIST/NESM3/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NUIST/NESM3/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NCC/NorESM2-LM/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-LM/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-LM/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-LM/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-LM/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NCC/NorESM2-LM/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-LM/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-LM/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-LM/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-LM/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NCC/NorESM2-MM/historical/r1i1p1f1/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-MM/ssp126/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-MM/ssp245/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-MM/ssp370/r1i1p1f1/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-MM/ssp585/r1i1p1f1/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/NCC/NorESM2-MM/historical/r1i1p1f1/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-MM/ssp126/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-MM/ssp245/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-MM/ssp370/r1i1p1f1/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/NCC/NorESM2-MM/ssp585/r1i1p1f1/day/tasmin/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MOHC/UKESM1-0-LL/historical/r1i1p1f2/day/tasmax/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/UKESM1-0-LL/ssp126/r1i1p1f2/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/UKESM1-0-LL/ssp245/r1i1p1f2/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/UKESM1-0-LL/ssp370/r1i1p1f2/day/tasmax/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/UKESM1-0-LL/ssp585/r1i1p1f2/day/tasmax/v1.1.zarr",
        ],
    },
    GdpcirRun {
        historical: "gs://downscaled-48ec31ab/outputs/CMIP/MOHC/UKESM1-0-LL/historical/r1i1p1f2/day/tasmin/v1.1.zarr",
        ssps: &[
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/UKESM1-0-LL/ssp126/r1i1p1f2/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/UKESM1-0-LL/ssp245/r1i1p1f2/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/UKESM1-0-LL/ssp370/r1i1p1f2/day/tasmin/v1.1.zarr",
            "gs://downscaled-48ec31ab/outputs/ScenarioMIP/MOHC/UKESM1-0-LL/ssp585/r1i1p1f2/day/tasmin/v1.1.zarr",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_pair_tasmax_and_tasmin() {
        assert_eq!(GDPCIR_TARGETS.len() % 2, 0);
        for pair in GDPCIR_TARGETS.chunks(2) {
            assert!(pair[0].historical.contains("/tasmax/"));
            assert!(pair[1].historical.contains("/tasmin/"));
            assert_eq!(
                pair[0].historical.replace("/tasmax/", "/tasmin/"),
                pair[1].historical
            );
            assert_eq!(pair[0].ssps.len(), pair[1].ssps.len());
        }
    }

    #[test]
    fn test_targets_are_zarr_stores() {
        for run in GDPCIR_TARGETS {
            assert!(run.historical.starts_with("gs://"));
            assert!(run.historical.ends_with(".zarr"));
            assert!(run.historical.contains("/historical/"));
            for ssp in run.ssps {
                assert!(ssp.contains("/ScenarioMIP/"));
                assert!(ssp.ends_with(".zarr"));
            }
        }
    }
}
