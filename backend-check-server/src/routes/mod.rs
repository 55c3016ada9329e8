//! HTTP route handlers
