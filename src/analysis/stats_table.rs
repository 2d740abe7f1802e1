use crate::api::models::{StatsRow, MATCH_COLUMN, REGION_COLUMN, SEASON_COLUMN, STATS_FIELD};
use crate::error::AppError;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Row view over a "Stats" collection. Every operation returns a new table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatsTable {
    rows: Vec<StatsRow>,
}

impl StatsTable {
    /// Projects the top-level "Stats" array of a player statistics result.
    pub fn from_stats(result: &Value) -> Result<Self, AppError> {
        let records = result
            .get(STATS_FIELD)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                AppError::DecodeError(format!("response has no \"{}\" array", STATS_FIELD))
            })?;

        Self::from_records(records)
    }

    fn from_records(records: &[Value]) -> Result<Self, AppError> {
        let rows = records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                record.as_object().cloned().ok_or_else(|| {
                    AppError::DecodeError(format!(
                        "\"{}\" entry {} is not an object",
                        STATS_FIELD, idx
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StatsTable { rows })
    }

    pub fn rows(&self) -> &[StatsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of row keys, in first-seen order.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for row in &self.rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        columns
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Keeps rows whose `column` is a string exactly equal to `value`.
    pub fn filter_eq(&self, column: &str, value: &str) -> StatsTable {
        let rows = self
            .rows
            .iter()
            .filter(|row| row.get(column).and_then(Value::as_str) == Some(value))
            .cloned()
            .collect();

        StatsTable { rows }
    }

    /// Concatenates the nested "Stats" arrays of every row into a new table.
    pub fn expand_nested(&self) -> Result<StatsTable, AppError> {
        let mut rows = Vec::new();
        for row in &self.rows {
            let nested = row.get(STATS_FIELD).and_then(Value::as_array).ok_or_else(|| {
                AppError::DecodeError(format!("row has no nested \"{}\" array", STATS_FIELD))
            })?;
            rows.extend(Self::from_records(nested)?.rows);
        }

        Ok(StatsTable { rows })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsFilter {
    pub region: Option<String>,
    pub match_mode: Option<String>,
    pub season: Option<String>,
}

impl StatsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn match_mode(mut self, match_mode: impl Into<String>) -> Self {
        self.match_mode = Some(match_mode.into());
        self
    }

    pub fn season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn apply(&self, table: &StatsTable) -> StatsTable {
        let predicates = [
            (REGION_COLUMN, self.region.as_deref()),
            (MATCH_COLUMN, self.match_mode.as_deref()),
            (SEASON_COLUMN, self.season.as_deref()),
        ];

        let mut filtered = table.clone();
        for (column, value) in predicates {
            if let Some(value) = value {
                filtered = filtered.filter_eq(column, value);
            }
        }

        debug!(
            before = table.len(),
            after = filtered.len(),
            filter = ?self,
            "filtered stats table"
        );
        filtered
    }
}
