//! HTTP status codes as a typed enum.
//!
//! Only the codes the service actually answers with. Use [`Status`] with
//! `Response::status()`, `Response::builder().status()`, or return it bare
//! from a handler.
//!
//! ```rust
//! use ptax::{Response, Status};
//!
//! Response::status(Status::NotFound);
//!
//! Response::builder()
//!     .status(Status::BadRequest)
//!     .json(&serde_json::json!({"error": "No value provided"}));
//! ```

use http::StatusCode;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    BadRequest,          // 400
    NotFound,            // 404
    MethodNotAllowed,    // 405
    InternalServerError, // 500
}

impl From<Status> for StatusCode {
    fn from(s: Status) -> StatusCode {
        match s {
            Status::Ok                  => StatusCode::OK,
            Status::BadRequest          => StatusCode::BAD_REQUEST,
            Status::NotFound            => StatusCode::NOT_FOUND,
            Status::MethodNotAllowed    => StatusCode::METHOD_NOT_ALLOWED,
            Status::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        StatusCode::from(s).as_u16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_wire_codes() {
        assert_eq!(u16::from(Status::Ok), 200);
        assert_eq!(u16::from(Status::BadRequest), 400);
        assert_eq!(u16::from(Status::NotFound), 404);
        assert_eq!(u16::from(Status::MethodNotAllowed), 405);
        assert_eq!(u16::from(Status::InternalServerError), 500);
    }
}
