use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use bi_analysis::analyze_brand;
use bi_core::{BrandReport, Error, ReportConfig};
use bi_insights::Topic;

use crate::AppState;

type ApiResult<T> = std::result::Result<Json<T>, (StatusCode, String)>;

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::InvalidBrand(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Service(_) | Error::Http(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn api_error(error: Error) -> (StatusCode, String) {
    (status_for(&error), error.to_string())
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub brand: String,
    #[serde(default)]
    pub competitors: Vec<String>,
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<BrandReport> {
    let report = analyze_brand(
        state.provider.as_ref(),
        &request.brand,
        &request.competitors,
    )
    .await
    .map_err(api_error)?;

    state.store.store_report(&report).await.map_err(api_error)?;
    Ok(Json(report))
}

pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(brand): Path<String>,
) -> ApiResult<BrandReport> {
    match state.store.last_report(&brand).await.map_err(api_error)? {
        Some(report) => Ok(Json(report)),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("No cached report for {}", brand),
        )),
    }
}

pub async fn list_topics() -> Json<Vec<&'static str>> {
    Json(Topic::ALL.iter().map(|t| t.name()).collect())
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> ApiResult<ReportConfig> {
    match state.store.load_config().await.map_err(api_error)? {
        Some(config) => Ok(Json(config)),
        None => Err((
            StatusCode::NOT_FOUND,
            "No report configuration saved".to_string(),
        )),
    }
}

pub async fn put_config(
    State(state): State<Arc<AppState>>,
    Json(config): Json<ReportConfig>,
) -> ApiResult<ReportConfig> {
    state.store.store_config(&config).await.map_err(api_error)?;
    Ok(Json(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_topics_order() {
        let Json(topics) = list_topics().await;
        assert_eq!(
            topics,
            vec![
                "consumer",
                "cost",
                "convenience",
                "communication",
                "competitive",
                "media"
            ]
        );
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            status_for(&Error::InvalidBrand("x".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&Error::Service("x".to_string())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&Error::Storage("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
