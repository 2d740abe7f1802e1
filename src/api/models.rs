use serde_json::{Map, Value};

// The remote API owns these schemas; results are passed through untyped.

// GET /profile/pc/{nickname}
pub type PlayerStats = Value;

// GET /search?steamId={id}
pub type PlayerSearch = Value;

// One record of a "Stats" collection
pub type StatsRow = Map<String, Value>;

pub const STATS_FIELD: &str = "Stats";
pub const REGION_COLUMN: &str = "Region";
pub const MATCH_COLUMN: &str = "Match";
pub const SEASON_COLUMN: &str = "Season";
