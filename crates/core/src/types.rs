/// All timestamps in the presentation runtime are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
