//! Rule listing handler.

use axum::Json;
use serde::Serialize;
use sieve::{CLEANABLE, CleanRule, UNCLEANABLE, UncleanableRule};

/// Both rule taxonomies.
#[derive(Serialize)]
pub struct RulesResponse {
    pub cleanable: &'static [CleanRule],
    pub uncleanable: &'static [UncleanableRule],
}

/// List the cleanable and uncleanable rules.
pub async fn list_rules() -> Json<RulesResponse> {
    Json(RulesResponse {
        cleanable: CLEANABLE,
        uncleanable: UNCLEANABLE,
    })
}
