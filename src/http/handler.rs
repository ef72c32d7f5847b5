use tracing::debug;

use crate::files;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// Routes a parsed request to its response by method.
///
/// GET and HEAD share the file-serving path; HEAD suppresses the body but
/// keeps every header a GET would send. POST is answered with 405 and any
/// other method with 501. Not-found is a response outcome here, never an
/// error.
pub async fn respond_to(req: &Request, docroot: &str) -> Response {
    match &req.method {
        Method::GET => file_response(req, docroot, false).await,
        Method::HEAD => file_response(req, docroot, true).await,
        Method::POST => Response::method_not_allowed(),
        Method::Extension(token) => {
            debug!("unimplemented method {}", token);
            Response::not_implemented()
        }
    }
}

async fn file_response(req: &Request, docroot: &str, head: bool) -> Response {
    match files::resolve(docroot, &req.path).await {
        Some(info) => Response::file(info, head),
        None => Response::not_found(),
    }
}
