use crate::error::CurationError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static DATASET_RE: OnceLock<Regex> = OnceLock::new();

fn dataset_re() -> &'static Regex {
    DATASET_RE.get_or_init(|| Regex::new(r"^/(.*)/(.*?)-(.*?)/(.*)$").expect("dataset pattern is valid"))
}

/// Fully qualified dataset name `/<short>/<run-period>-<version>/<tier>`,
/// e.g. `/ZeroBias/HIRun2015-PromptReco-v1/AOD`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DatasetName {
    full: String,
    short: String,
    run_period: String,
    version: String,
    tier: String,
    year: String,
    run_descriptor: String,
}

impl DatasetName {
    pub fn parse(s: &str) -> Result<Self, CurationError> {
        let invalid = || CurationError::InvalidDatasetName(s.to_string());
        let caps = dataset_re().captures(s).ok_or_else(invalid)?;
        let run_period = caps[2].to_string();

        let year = year_of(&run_period);
        let run_descriptor = run_period.replace(&year, "");

        Ok(Self {
            full: s.to_string(),
            short: caps[1].to_string(),
            version: caps[3].to_string(),
            tier: caps[4].to_string(),
            run_period,
            year,
            run_descriptor,
        })
    }

    pub fn full_name(&self) -> &str { &self.full }
    pub fn short_name(&self) -> &str { &self.short }
    pub fn run_period(&self) -> &str { &self.run_period }
    pub fn version(&self) -> &str { &self.version }
    /// Data tier, e.g. `AOD`.
    pub fn tier(&self) -> &str { &self.tier }
    /// Characters 3..7 of the run period: `2015` for `Run2015E`, `un20` for `HIRun2015`.
    pub fn year(&self) -> &str { &self.year }
    /// Run period with the year removed, e.g. `RunE` for `Run2015E`.
    pub fn run_descriptor(&self) -> &str { &self.run_descriptor }
}

/// Fixed-position slice of the run period, clamped to its length (may be short or empty).
fn year_of(run_period: &str) -> String {
    run_period.chars().skip(3).take(4).collect()
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}-{}/{}", self.short, self.run_period, self.version, self.tier)
    }
}

impl FromStr for DatasetName {
    type Err = CurationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
