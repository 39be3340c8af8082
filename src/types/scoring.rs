use serde::Serialize;

pub type Score = f64;

pub const MIN_SCORE: Score = 0.0;
pub const MAX_SCORE: Score = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ProblemClarity,
    NoveltyTrendFit,
    DistributionPotential,
    ExecutionQuality,
}

impl Dimension {
    /// Fixed presentation order.
    pub const ALL: [Dimension; 4] = [
        Dimension::ProblemClarity,
        Dimension::NoveltyTrendFit,
        Dimension::DistributionPotential,
        Dimension::ExecutionQuality,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::ProblemClarity => "problem_clarity",
            Dimension::NoveltyTrendFit => "novelty_trend_fit",
            Dimension::DistributionPotential => "distribution_potential",
            Dimension::ExecutionQuality => "execution_quality",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub score: Score,
    pub why: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub problem_clarity: f64,
    pub novelty_trend_fit: f64,
    pub distribution_potential: f64,
    pub execution_quality: f64,
}

impl Weights {
    pub const fn standard() -> Self {
        Self {
            problem_clarity: 0.30,
            novelty_trend_fit: 0.25,
            distribution_potential: 0.25,
            execution_quality: 0.20,
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::ProblemClarity => self.problem_clarity,
            Dimension::NoveltyTrendFit => self.novelty_trend_fit,
            Dimension::DistributionPotential => self.distribution_potential,
            Dimension::ExecutionQuality => self.execution_quality,
        }
    }

    pub fn sum(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

/// Justification thresholds. `high` is inclusive from below, `low` inclusive from above;
/// anything strictly between them is mid-band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub high: Score,
    pub low: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandLevel {
    High,
    Mid,
    Low,
}

impl Band {
    pub fn classify(&self, score: Score) -> BandLevel {
        if score >= self.high {
            BandLevel::High
        } else if score <= self.low {
            BandLevel::Low
        } else {
            BandLevel::Mid
        }
    }
}

/// The three fixed sentences a dimension may emit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Justifications {
    pub high: &'static str,
    pub mid: &'static str,
    pub low: &'static str,
}

impl Justifications {
    pub fn pick(&self, level: BandLevel) -> &'static str {
        match level {
            BandLevel::High => self.high,
            BandLevel::Mid => self.mid,
            BandLevel::Low => self.low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionRubric {
    pub base: Score,
    pub band: Band,
    pub why: Justifications,
}

impl DimensionRubric {
    /// Clamp into range and attach the banded sentence.
    pub fn finalize(&self, raw: Score) -> DimensionScore {
        let score = raw.clamp(MIN_SCORE, MAX_SCORE);
        DimensionScore {
            score,
            why: self.why.pick(self.band.classify(score)),
        }
    }
}

/// Immutable rubric shared by scorer and aggregator. The thresholds track the
/// highest score each dimension can reach from the README alone, so they are
/// kept as literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringProfile {
    pub weights: Weights,
    pub problem_clarity: DimensionRubric,
    pub novelty_trend_fit: DimensionRubric,
    pub distribution_potential: DimensionRubric,
    pub execution_quality: DimensionRubric,
}

pub static STANDARD_PROFILE: ScoringProfile = ScoringProfile::standard();

impl ScoringProfile {
    pub const fn standard() -> Self {
        Self {
            weights: Weights::standard(),
            problem_clarity: DimensionRubric {
                base: 3.0,
                band: Band { high: 7.0, low: 5.0 },
                why: Justifications {
                    high: "README quickly answers what this is and why it matters.",
                    mid: "The purpose comes through, but a newcomer has to dig for the why.",
                    low: "Hard to tell what this is or why it matters from the first screen.",
                },
            },
            novelty_trend_fit: DimensionRubric {
                base: 4.0,
                band: Band { high: 6.5, low: 5.0 },
                why: Justifications {
                    high: "Pitch has a distinct angle and lines up with a current trend.",
                    mid: "Some novelty or trend signal, but the angle is not sharp.",
                    low: "Reads like a familiar idea without a hook that stands out.",
                },
            },
            distribution_potential: DimensionRubric {
                base: 3.5,
                band: Band { high: 8.0, low: 5.0 },
                why: Justifications {
                    high: "A visual demo and copy-paste onboarding make this easy to share and try.",
                    mid: "Shareable in parts; a demo or a faster first run would help it spread.",
                    low: "Little to show or run quickly, which limits word of mouth.",
                },
            },
            execution_quality: DimensionRubric {
                base: 3.0,
                band: Band { high: 8.0, low: 5.0 },
                why: Justifications {
                    high: "Clear install and usage paths with runnable steps signal solid execution.",
                    mid: "Basic onboarding is present but thin on runnable detail.",
                    low: "Few install or usage cues, so trying it takes guesswork.",
                },
            },
        }
    }

    pub fn rubric(&self, dimension: Dimension) -> &DimensionRubric {
        match dimension {
            Dimension::ProblemClarity => &self.problem_clarity,
            Dimension::NoveltyTrendFit => &self.novelty_trend_fit,
            Dimension::DistributionPotential => &self.distribution_potential,
            Dimension::ExecutionQuality => &self.execution_quality,
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::standard()
    }
}
