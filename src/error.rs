use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use json::json;

use crate::entity::CommissionStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("affiliate not found")]
  AffiliateNotFound,
  #[error("product not found")]
  ProductNotFound,
  #[error("order not found")]
  OrderNotFound,
  #[error("commission not found")]
  CommissionNotFound,
  #[error("invalid commission transition: {from:?} -> {to:?}")]
  InvalidTransition { from: CommissionStatus, to: CommissionStatus },
  #[error("invalid arguments: {0}")]
  InvalidArgs(String),
  #[error(transparent)]
  Db(#[from] sea_orm::DbErr),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::AffiliateNotFound
      | Error::ProductNotFound
      | Error::OrderNotFound
      | Error::CommissionNotFound => StatusCode::NOT_FOUND,
      Error::InvalidTransition { .. } | Error::InvalidArgs(_) => {
        StatusCode::UNPROCESSABLE_ENTITY
      }
      Error::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
      tracing::error!("request failed: {self}");
    }

    (status, Json(json!({ "success": false, "msg": self.to_string() })))
      .into_response()
  }
}
