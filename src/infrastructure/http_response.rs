// HTTP response helpers for rendered pages
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Response,
};
use tokio::io::AsyncReadExt;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Whether the client advertised Brotli support with a non-zero quality.
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').any(|enc| encoding_quality(enc, "br") > 0.0))
        .unwrap_or(false)
}

// Quality of one `Accept-Encoding` entry for `coding`, 0 when it names another
// coding. A missing or unparsable `q` counts as 1.
fn encoding_quality(entry: &str, coding: &str) -> f32 {
    let mut parts = entry.split(';').map(str::trim);
    match parts.next() {
        Some(name) if name.eq_ignore_ascii_case(coding) => {}
        _ => return 0.0,
    }
    parts
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("q"))
        .and_then(|(_, value)| value.trim().parse::<f32>().ok())
        .unwrap_or(1.0)
}

/// Build an HTML response, optionally Brotli-compressed.
pub async fn html_response(html: String, compress: bool) -> Result<Response<Body>, StatusCode> {
    let html_bytes = html.into_bytes();

    let (body_bytes, content_encoding) = if compress {
        let mut encoder = BrotliEncoder::new(html_bytes.as_slice());
        let mut compressed = Vec::new();
        encoder.read_to_end(&mut compressed).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!(
            "Compressed page: {} → {} bytes",
            html_bytes.len(),
            compressed.len()
        );
        (compressed, Some("br"))
    } else {
        (html_bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(header::VARY, "accept-encoding")
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()));

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
