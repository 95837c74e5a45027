use crate::choice;
use crate::choices::*;
use anyhow::Context;

choice!(
    #[derive(serde::Deserialize, clap::ValueEnum)]
    #[serde(rename_all = "lowercase")]
    Algorithm,
    Exhaustive => "Exhaustive - Compares every pair of points, O(n²)",
    Divide => "Divide and Conquer - Splits by x and merges across the midline, O(n log n)",
    Parallel => "Parallel Divide and Conquer - Recurses into both halves on the thread pool",
    Both => "Both - Runs exhaustive and divide and conquer and checks they agree"
);

choice!(PointCount,
    Hundred => "100 points",
    Thousand => "1,000 points",
    TenThousand => "10,000 points",
    HundredThousand => "100,000 points (exhaustive search will be slow)",
    Custom => "Custom - Type in a number of points"
);

impl Algorithm {
    pub fn runs_exhaustive(self) -> bool {
        matches!(self, Algorithm::Exhaustive | Algorithm::Both)
    }

    pub fn runs_divide(self) -> bool {
        !matches!(self, Algorithm::Exhaustive)
    }
}

pub fn get_point_count(count: PointCount) -> anyhow::Result<usize> {
    let n = match count {
        PointCount::Hundred => 100,
        PointCount::Thousand => 1_000,
        PointCount::TenThousand => 10_000,
        PointCount::HundredThousand => 100_000,
        PointCount::Custom => inquire::prompt_u32("How many points should each trial use?")
            .context("Failed to read point count")? as usize,
    };

    Ok(n)
}
