pub mod collection;
pub mod common;
pub mod homepage;
pub mod local_business;
pub mod product;
pub mod prune;
pub mod recommend;
pub mod service_page;

use serde_json::Value;

use crate::error::SchemaError;
use crate::input::PageInput;

/// Run the builder for the record's page type, then prune each document
/// exactly once. All output flows through here.
pub fn generate(input: &PageInput) -> Result<Vec<Value>, SchemaError> {
    let documents = match input {
        PageInput::Homepage(i) => homepage::build(i)?,
        PageInput::LocalBusiness(i) => vec![local_business::build(i)?],
        PageInput::ServicePage(i) => vec![service_page::build(i)?],
        PageInput::CollectionPage(i) => vec![collection::build(i)?],
        PageInput::ProductPage(i) => vec![product::build(i)?],
    };
    Ok(documents.into_iter().map(prune::prune).collect())
}

// ── End-to-end tests over full input records ──
