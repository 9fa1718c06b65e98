//! Request metadata handling.
//!
//! This module provides the request-head abstraction handed to a consumer when the
//! driver reports that a request has been received. It wraps the standard
//! `http::Request` type; parsing the wire format into it is the driver's concern.

use http::request::Parts;
use http::{HeaderMap, Method, Request, Uri, Version};

/// The request line and headers of one inbound request, without a body.
///
/// This struct wraps a `http::Request<()>` to provide:
/// - Access to standard HTTP header fields
/// - Conversion from different request formats
/// - Body attachment capabilities
#[derive(Debug)]
pub struct RequestHead {
    inner: Request<()>,
}

impl From<Request<()>> for RequestHead {
    fn from(request: Request<()>) -> Self {
        Self { inner: request }
    }
}

impl From<Parts> for RequestHead {
    fn from(parts: Parts) -> Self {
        Self { inner: Request::from_parts(parts, ()) }
    }
}

impl AsRef<Request<()>> for RequestHead {
    fn as_ref(&self) -> &Request<()> {
        &self.inner
    }
}

impl RequestHead {
    /// Consumes the head and returns the inner `Request<()>`.
    pub fn into_inner(self) -> Request<()> {
        self.inner
    }

    /// Attaches a body to this head, converting it into a full `Request<T>`.
    ///
    /// This is typically used by a consumer when building its result.
    pub fn body<T>(self, body: T) -> Request<T> {
        self.inner.map(|_| body)
    }

    /// Returns a reference to the request's HTTP method.
    pub fn method(&self) -> &Method {
        self.inner.method()
    }

    /// Returns a reference to the request's URI.
    pub fn uri(&self) -> &Uri {
        self.inner.uri()
    }

    /// Returns the request's HTTP version.
    pub fn version(&self) -> Version {
        self.inner.version()
    }

    /// Returns a reference to the request's headers.
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Determines if this request may carry a body based on its HTTP method.
    ///
    /// Returns false for methods that typically don't have bodies:
    /// - GET
    /// - HEAD
    /// - DELETE
    /// - OPTIONS
    /// - CONNECT
    pub fn need_body(&self) -> bool {
        !matches!(self.method(), &Method::GET | &Method::HEAD | &Method::DELETE | &Method::OPTIONS | &Method::CONNECT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head(method: Method) -> RequestHead {
        Request::builder().method(method).uri("/resource").body(()).unwrap().into()
    }

    #[test]
    fn test_need_body() {
        assert!(head(Method::POST).need_body());
        assert!(head(Method::PUT).need_body());
        assert!(!head(Method::GET).need_body());
        assert!(!head(Method::HEAD).need_body());
    }

    #[test]
    fn test_body_attachment() {
        let request = head(Method::POST).body("payload");
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.uri().path(), "/resource");
        assert_eq!(*request.body(), "payload");
    }
}
