use log::info;
use serde::{Deserialize, Serialize};

use super::encoder::StationEncoder;
use super::evaluation::{Evaluation, mean_absolute_error, train_test_split};
use super::forest::{ForestConfig, RandomForest};
use super::scaler::StandardScaler;
use crate::synthetic::TripRecord;
use crate::{Distance, Error, Minutes};

/// Length of a feature row:
/// origin code, destination code, scaled distance, scaled hour,
/// scaled day of week, rain, event
pub const FEATURE_COUNT: usize = 7;

type FeatureRow = [f64; FEATURE_COUNT];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Share of trips held out to evaluate the fitted model
    pub test_fraction: f64,
    pub split_seed: u64,
    pub forest: ForestConfig,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            split_seed: 42,
            forest: ForestConfig::default(),
        }
    }
}

impl PredictorConfig {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !(0.0..1.0).contains(&self.test_fraction) {
            return Err(Error::InvalidData(format!(
                "test_fraction must be in [0, 1), got {}",
                self.test_fraction
            )));
        }
        self.forest.validate()
    }
}

/// Features of one segment to predict
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentQuery<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub distance: Distance,
    pub hour: u8,
    pub day_of_week: u8,
    pub rain: bool,
    pub event: bool,
}

pub(crate) fn validate_time_features(hour: u8, day_of_week: u8) -> Result<(), Error> {
    if hour > 23 {
        return Err(Error::InvalidConditions(format!(
            "hour must be in 0..=23, got {hour}"
        )));
    }
    if day_of_week > 6 {
        return Err(Error::InvalidConditions(format!(
            "day_of_week must be in 0..=6, got {day_of_week}"
        )));
    }
    Ok(())
}

/// Fitted travel time predictor
///
/// Holds the station encoder, the scaler of the numeric features and the
/// regressor. It is immutable once fitted.
#[derive(Debug, Clone)]
pub struct TravelTimeModel {
    encoder: StationEncoder,
    scaler: StandardScaler<3>,
    forest: RandomForest,
    evaluation: Option<Evaluation>,
}

impl TravelTimeModel {
    /// Fits the predictor on simulated trips
    ///
    /// The encoder is fitted on `stations`, the scaler on all trips, and the
    /// forest on the training part of a shuffled split. The held-out part is
    /// used to compute the mean absolute error.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidData` for an invalid configuration or no trips
    /// - `Error::UnknownStation` if a trip references a station not in `stations`
    pub fn fit<'a, I>(
        stations: I,
        trips: &[TripRecord],
        config: &PredictorConfig,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        config.validate()?;
        if trips.is_empty() {
            return Err(Error::InvalidData(
                "Cannot fit the travel time model without trips".to_string(),
            ));
        }

        let encoder = StationEncoder::fit(stations);

        let numeric: Vec<[f64; 3]> = trips
            .iter()
            .map(|trip| {
                [
                    trip.distance,
                    f64::from(trip.hour),
                    f64::from(trip.day_of_week),
                ]
            })
            .collect();
        let scaler = StandardScaler::<3>::fit(&numeric)?;

        let features = trips
            .iter()
            .zip(&numeric)
            .map(|(trip, &row)| -> Result<FeatureRow, Error> {
                Ok(assemble_row(
                    encoder.encode(&trip.origin)?,
                    encoder.encode(&trip.destination)?,
                    scaler.transform(row),
                    trip.rain,
                    trip.event,
                ))
            })
            .collect::<Result<Vec<FeatureRow>, Error>>()?;
        let targets: Vec<Minutes> = trips.iter().map(|trip| trip.travel_time).collect();

        let (train, test) = train_test_split(trips.len(), config.test_fraction, config.split_seed);
        let train_features: Vec<FeatureRow> = train.iter().map(|&i| features[i]).collect();
        let train_targets: Vec<Minutes> = train.iter().map(|&i| targets[i]).collect();

        info!(
            "Fitting {} trees on {} trips ({} held out)",
            config.forest.n_trees,
            train.len(),
            test.len()
        );
        let forest = RandomForest::fit(&train_features, &train_targets, &config.forest)?;

        let test_targets: Vec<Minutes> = test.iter().map(|&i| targets[i]).collect();
        let test_predictions: Vec<Minutes> =
            test.iter().map(|&i| forest.predict(&features[i])).collect();
        let evaluation =
            mean_absolute_error(&test_targets, &test_predictions).map(|mae| Evaluation {
                mean_absolute_error: mae,
                train_size: train.len(),
                test_size: test.len(),
            });

        match &evaluation {
            Some(evaluation) => info!(
                "Mean absolute error on {} held out trips: {:.2} minutes",
                evaluation.test_size, evaluation.mean_absolute_error
            ),
            None => info!("No trips held out, skipping evaluation"),
        }

        Ok(Self {
            encoder,
            scaler,
            forest,
            evaluation,
        })
    }

    /// Predicts the travel time of a single segment in minutes
    ///
    /// # Errors
    ///
    /// - `Error::UnknownStation` if a station was not known when fitting
    /// - `Error::InvalidConditions` if hour, day or distance are out of range
    pub fn predict(&self, query: &SegmentQuery<'_>) -> Result<Minutes, Error> {
        validate_time_features(query.hour, query.day_of_week)?;
        if !query.distance.is_finite() || query.distance < 0.0 {
            return Err(Error::InvalidConditions(format!(
                "distance must be a non-negative number, got {}",
                query.distance
            )));
        }

        let row = assemble_row(
            self.encoder.encode(query.origin)?,
            self.encoder.encode(query.destination)?,
            self.scaler.transform([
                query.distance,
                f64::from(query.hour),
                f64::from(query.day_of_week),
            ]),
            query.rain,
            query.event,
        );

        Ok(self.forest.predict(&row))
    }

    pub fn encoder(&self) -> &StationEncoder {
        &self.encoder
    }

    pub fn scaler(&self) -> &StandardScaler<3> {
        &self.scaler
    }

    pub fn forest(&self) -> &RandomForest {
        &self.forest
    }

    /// Hold-out evaluation, `None` when no trips were held out
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }
}

fn assemble_row(
    origin: u32,
    destination: u32,
    [distance, hour, day_of_week]: [f64; 3],
    rain: bool,
    event: bool,
) -> FeatureRow {
    [
        f64::from(origin),
        f64::from(destination),
        distance,
        hour,
        day_of_week,
        f64::from(u8::from(rain)),
        f64::from(u8::from(event)),
    ]
}
