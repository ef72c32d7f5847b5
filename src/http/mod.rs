//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.x subset the server speaks: one
//! request per connection, no keep-alive, responses always stated as
//! HTTP/1.0 with `Connection: close`.
//!
//! # Architecture
//!
//! - **`connection`**: owns one connection's read → dispatch → write cycle
//! - **`parser`**: parses incoming requests from byte buffers
//! - **`request`**: request, method, and header field representation
//! - **`response`**: response representation and outcome constructors
//! - **`writer`**: serializes headers and streams the body to the client
//! - **`handler`**: routes a parsed request by method
//!
//! # Connection lifecycle
//!
//! ```text
//! Reading ──parse──▶ Dispatch ──response──▶ Writing ──flush──▶ Closed
//! ```
//!
//! There is no path back from Writing to Reading: every connection carries
//! exactly one exchange and is closed unconditionally afterwards.

pub mod connection;
pub mod handler;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
