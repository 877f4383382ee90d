//! HTTP execution helpers shared by the model directory and model handles.

pub mod headers;
pub mod transport;

pub use headers::HttpHeaderBuilder;
pub use transport::{
    HttpRequestContext, HttpTransport, HttpTransportRequest, HttpTransportResponse,
    ReqwestTransport, build_http_client,
};
