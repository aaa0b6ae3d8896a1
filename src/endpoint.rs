//! Route table and the `/ptax` handler.

use serde::Serialize;
use tracing::debug;

use crate::estimate::estimate;
use crate::{Request, Response, Router, Status, health};

/// Body of every `400` from `/ptax`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// The service's routes.
pub fn app() -> Router {
    Router::new()
        .get("/ptax", ptax)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
}

/// `GET /ptax?value=<number>[&address=<text>]`
///
/// `200` with the estimate, or `400` with `{"error": "..."}`.
pub async fn ptax(req: Request) -> Response {
    match estimate(req.query("address"), req.query("value")) {
        Ok(result) => Response::json(&result),
        Err(err) => {
            debug!(error = %err, "rejected estimate request");
            Response::builder()
                .status(Status::BadRequest)
                .json(&ErrorBody { error: err.to_string() })
        }
    }
}
