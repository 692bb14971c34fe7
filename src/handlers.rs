use std::net::SocketAddr;

use axum::{
  Json,
  extract::{ConnectInfo, Form, Path, Query, State},
  http::{HeaderMap, HeaderValue, header},
  response::{IntoResponse, Redirect, Response},
};
use json::json;
use serde::Deserialize;

use crate::{
  prelude::*,
  state::AppState,
  sv::{self, attribution::Visitor, checkout::BuyerInfo},
  token,
};

const COOKIE_NAME: &str = "affiliate_code";
/// 30 days, matching the attribution window.
const COOKIE_MAX_AGE: u32 = 30 * 24 * 60 * 60;

#[derive(Deserialize)]
pub struct TrackQuery {
  pub product: Option<String>,
}

#[derive(Deserialize)]
pub struct CheckoutForm {
  pub full_name: String,
  pub email: String,
  pub phone: String,
  pub address: String,
  pub city: String,
  #[serde(default = "one")]
  pub quantity: i32,
}

fn one() -> i32 {
  1
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> String {
  headers
    .get(name)
    .and_then(|v| v.to_str().ok())
    .unwrap_or_default()
    .to_string()
}

/// Extracts and verifies the attribution cookie. A missing, malformed,
/// or forged cookie is simply no attribution.
fn attributed_code<'a>(headers: &'a HeaderMap, secret: &str) -> Option<&'a str> {
  headers
    .get_all(header::COOKIE)
    .iter()
    .filter_map(|v| v.to_str().ok())
    .flat_map(|v| v.split(';'))
    .filter_map(|pair| pair.trim().strip_prefix(COOKIE_NAME))
    .filter_map(|rest| rest.strip_prefix('='))
    .find_map(|value| token::verify(value, secret))
}

fn attribution_cookie(code: &str, secret: &str) -> HeaderValue {
  let value = format!(
    "{COOKIE_NAME}={}; Max-Age={COOKIE_MAX_AGE}; Path=/; SameSite=Lax",
    token::sign(code, secret)
  );
  HeaderValue::from_str(&value).expect("cookie value is ascii")
}

/// GET /aff/{code}?product={slug}
///
/// Logs the click, drops the signed attribution cookie, and redirects to
/// the product page (or home for an unknown product). Bad codes redirect
/// home without a cookie so the shop link still works.
pub async fn track_click(
  State(app): State<Arc<AppState>>,
  Path(code): Path<String>,
  Query(query): Query<TrackQuery>,
  ConnectInfo(addr): ConnectInfo<SocketAddr>,
  headers: HeaderMap,
) -> Result<Response> {
  let visitor = Visitor {
    ip_address: Some(addr.ip().to_string()),
    user_agent: header_str(&headers, header::USER_AGENT),
    referrer: header_str(&headers, header::REFERER),
  };

  let outcome = match sv::Attribution::new(&app.db)
    .record_click(&code, query.product.as_deref(), visitor)
    .await
  {
    Ok(outcome) => outcome,
    Err(Error::AffiliateNotFound) => {
      return Ok(Redirect::to("/").into_response());
    }
    Err(err) => return Err(err),
  };

  let target = match &outcome.product {
    Some(product) => format!("/products/{}", product.slug),
    None => "/".to_string(),
  };

  let mut response = Redirect::to(&target).into_response();
  response.headers_mut().insert(
    header::SET_COOKIE,
    attribution_cookie(&outcome.affiliate.affiliate_code, &app.secret),
  );
  Ok(response)
}

/// POST /checkout/{slug}
pub async fn checkout(
  State(app): State<Arc<AppState>>,
  Path(slug): Path<String>,
  headers: HeaderMap,
  Form(form): Form<CheckoutForm>,
) -> Result<Redirect> {
  let code = attributed_code(&headers, &app.secret);

  let buyer = BuyerInfo {
    full_name: form.full_name,
    email: form.email,
    phone: form.phone,
    address: form.address,
    city: form.city,
  };

  let order = sv::Checkout::new(&app.db)
    .place_order(&slug, buyer, form.quantity, code)
    .await?;

  Ok(Redirect::to(&format!("/orders/{}", order.order_id)))
}

/// GET /orders/{order_id}
pub async fn order_confirmation(
  State(app): State<Arc<AppState>>,
  Path(order_id): Path<String>,
) -> Result<Json<json::Value>> {
  let sv = sv::Orders::new(&app.db);
  let order = sv.by_public_id(&order_id).await?;
  let items = sv.items(order.id).await?;

  Ok(Json(json!({
    "success": true,
    "order": {
      "order_id": order.order_id,
      "full_name": order.full_name,
      "city": order.city,
      "total_amount": order.total_amount,
      "status": order.status,
      "created_at": order.created_at,
    },
    "items": items
      .iter()
      .map(|item| {
        json!({
          "product_id": item.product_id,
          "price": item.price,
          "quantity": item.quantity,
          "cost": item.cost(),
        })
      })
      .collect::<Vec<_>>(),
  })))
}

pub async fn health() -> Json<json::Value> {
  Json(json!({ "success": true }))
}
