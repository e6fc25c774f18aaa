pub mod backend;
pub mod controller;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use backend::{DEFAULT_API_URL, HttpLiteratureSearch, LiteratureSearch};
pub use controller::{QueryController, QueryPhase, SubmitStatus};
pub use error::{QueryError, Result, UNKNOWN_ERROR};
pub use models::{Match, QueryResult, SearchRequest, Year};
