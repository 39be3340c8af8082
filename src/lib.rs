pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod report;
pub mod scan;
pub mod types;

pub use analyze::{aggregate, evaluate, validate_scores};
pub use error::{StarsError, ValidationError};
pub use scan::{detect_signals, SignalSet};
pub use types::report::{EvaluationResult, ScoreReport};
pub use types::scoring::{Dimension, DimensionScore, Score};
