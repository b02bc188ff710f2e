use crate::sources::error::SourceError;
use crate::types::daily_observation::DailyObservation;

/// What a single data source produced for one month.
#[derive(Debug)]
pub enum SourceOutcome {
    /// At least one in-month observation, sorted by date.
    Success(Vec<DailyObservation>),
    /// The source answered but had nothing usable for the month.
    Empty,
    /// The source could not be reached or answered with an error.
    TransportFailure(SourceError),
}

impl SourceOutcome {
    pub(crate) fn from_observations(observations: Vec<DailyObservation>) -> Self {
        if observations.is_empty() {
            SourceOutcome::Empty
        } else {
            SourceOutcome::Success(observations)
        }
    }

    /// The observations, or an empty vector for `Empty` and `TransportFailure`.
    pub fn into_observations(self) -> Vec<DailyObservation> {
        match self {
            SourceOutcome::Success(observations) => observations,
            SourceOutcome::Empty | SourceOutcome::TransportFailure(_) => Vec::new(),
        }
    }
}
