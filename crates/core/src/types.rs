/// Store-generated primary keys are PostgreSQL BIGSERIAL.
///
/// Externally supplied identifiers (user, workout template) are opaque to
/// this service and stay as text end to end.
pub type DbId = i64;
