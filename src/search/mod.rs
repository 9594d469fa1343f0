pub mod controller;
pub mod query;

pub use controller::{SearchController, Submission, ViewState};
pub use query::SearchQuery;
