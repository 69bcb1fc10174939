pub mod profile_query;
pub mod profile_repository;

pub use profile_query::{MatchPreferences, ProfileQuery, ProfileQueryError, MATCH_RESULT_LIMIT};
pub use profile_repository::{ProfileDraft, ProfileRepository, ProfileRepositoryError};
