//! Radix-tree request router.
//!
//! One `matchit` tree per HTTP method. A path that exists under some other
//! method answers `405` with an `allow` header; an unknown path answers `404`.

use std::collections::HashMap;
use std::sync::Arc;

use http::request::Parts;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Registration methods return `self` so they chain.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax and are read with `req.param("name")`.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Shorthand for `on(Method::Get, path, handler)`.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    /// Routes one request and runs its handler.
    pub async fn handle(&self, parts: Parts) -> Response {
        let path = parts.uri.path().to_owned();
        let method = Method::try_from(&parts.method).ok();

        if let Some(method) = method {
            if let Some((handler, params)) = self.lookup(method, &path) {
                return handler.call(Request::new(method, parts, params)).await;
            }
        }

        let allowed = self.allowed(&path);
        if allowed.is_empty() {
            Response::status(Status::NotFound)
        } else {
            Response::builder()
                .status(Status::MethodNotAllowed)
                .header("allow", &allowed.join(", "))
                .no_body()
        }
    }

    fn lookup(&self, method: Method, path: &str) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Methods that have a route matching `path`, sorted for a stable header.
    fn allowed(&self, path: &str) -> Vec<&'static str> {
        let mut methods: Vec<&'static str> = self
            .routes
            .iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(method, _)| method.as_str())
            .collect();
        methods.sort_unstable();
        methods
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
