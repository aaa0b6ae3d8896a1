//! Liveness and readiness probes.
//!
//! | Probe | Path | Answer |
//! |---|---|---|
//! | Liveness | `/healthz` | `200 ok` while the process can serve HTTP |
//! | Readiness | `/readyz` | `200 ready`; estimates need no warm-up or downstreams |

use crate::{Request, Response};

pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

pub async fn readiness(_req: Request) -> Response {
    Response::text("ready")
}
