use super::super::ApiState;
use crate::pricing::ConversionError;
use crate::types::*;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct RateCardQuery {
    pub metal: Option<String>,    // gold, silver
    pub currency: Option<String>, // INR, USD, EUR
    pub unit_grams: Option<String>,
}

// Price相关handlers
pub async fn get_prices(State(state): State<ApiState>) -> Result<Json<PriceDashboard>, StatusCode> {
    match state.price_service.get_dashboard().await {
        Ok(dashboard) => Ok(Json(dashboard)),
        Err(e) => {
            tracing::error!("Failed to get price dashboard: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get_rate_card(
    Query(params): Query<RateCardQuery>,
    State(state): State<ApiState>,
) -> Result<Json<RateCard>, StatusCode> {
    let metal = parse_or_default(params.metal, Metal::Gold)?;
    let currency = parse_or_default(params.currency, Currency::Inr)?;
    let unit_grams = match params.unit_grams {
        Some(raw) => Decimal::from_str(&raw).map_err(|_| StatusCode::BAD_REQUEST)?,
        None => Decimal::ONE,
    };

    match state.price_service.get_rate_card(metal, currency, unit_grams).await {
        Ok(card) => Ok(Json(card)),
        Err(e) if e.downcast_ref::<ConversionError>().is_some() => {
            tracing::debug!("Rejected rate card query: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e) => {
            tracing::error!("Failed to get rate card: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn parse_or_default<T: FromStr>(raw: Option<String>, default: T) -> Result<T, StatusCode> {
    match raw {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(default),
    }
}
