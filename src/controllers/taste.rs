use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::taste::{TasteEngine, TasteEngineApi, TasteResult},
    error::AppResult,
};

pub struct TasteController {
    taste_engine: Arc<TasteEngine>,
}

impl TasteController {
    pub fn new(taste_engine: Arc<TasteEngine>) -> Self {
        Self { taste_engine }
    }

    /// GET /api/taste - Average favorite score and taste category
    pub async fn determine_taste(
        State(controller): State<Arc<TasteController>>,
    ) -> AppResult<Json<TasteResult>> {
        let taste = controller.taste_engine.determine_taste().await?;
        Ok(Json(taste))
    }
}
