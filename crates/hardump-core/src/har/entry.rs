//! Builds one HAR entry from a completed flow.

use chrono::{DateTime, Utc};

use crate::config::EmptyListStyle;
use crate::flow::{Flow, FlowRequest, FlowResponse};

use super::cookie::{format_request_cookies, format_response_cookies};
use super::model::{Cache, Content, Entry, Request, Response, Timings};
use super::name_value::name_value;
use super::time::format_timestamp;

/// Inputs to entry formatting that do not come from the flow itself.
#[derive(Debug, Clone, Copy)]
pub struct EntryOptions {
    pub empty_lists: EmptyListStyle,
    /// Reference time for `max-age` cookie expiry.
    pub now: DateTime<Utc>,
}

/// Milliseconds between two timestamps, truncated toward zero. -1 if either is missing.
fn span_ms(start: Option<f64>, end: Option<f64>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (1000.0 * (end - start)) as i64,
        _ => -1,
    }
}

/// Send, receive and wait phases of a flow.
///
/// The upstream connection is opened as soon as the request target is
/// known, so the gap between request end and response start is all wait.
pub fn timings(flow: &Flow) -> Timings {
    let req = &flow.request;
    let resp = &flow.response;
    Timings {
        send: span_ms(Some(req.timestamp_start), req.timestamp_end),
        receive: span_ms(resp.timestamp_start, resp.timestamp_end),
        wait: span_ms(req.timestamp_end, resp.timestamp_start),
    }
}

pub fn build_entry(flow: &Flow, opts: &EntryOptions) -> Entry {
    let timings = timings(flow);
    let started_date_time = format_timestamp(flow.request.timestamp_start).unwrap_or_else(|| {
        tracing::warn!(
            ts = flow.request.timestamp_start,
            "request start timestamp out of range"
        );
        String::new()
    });

    Entry {
        started_date_time,
        time: timings.total(),
        request: build_request(&flow.request, opts),
        response: build_response(&flow.response, opts),
        cache: Cache {},
        timings,
    }
}

fn build_request(req: &FlowRequest, opts: &EntryOptions) -> Request {
    Request {
        method: req.method.clone(),
        url: req.url.clone(),
        http_version: req.http_version.clone(),
        cookies: format_request_cookies(&req.cookies, opts.now),
        headers: name_value(req.headers.fields(), opts.empty_lists),
        query_string: name_value(&req.query, opts.empty_lists),
        headers_size: req.headers.wire_len(),
        body_size: req.content.len(),
    }
}

fn build_response(resp: &FlowResponse, opts: &EntryOptions) -> Response {
    let body_size = resp.content.len();
    // Only the transferred body is available, so decoded size == size.
    let decoded_size = resp.content.len();
    Response {
        status: resp.status_code,
        status_text: resp.reason.clone(),
        http_version: resp.http_version.clone(),
        cookies: format_response_cookies(&resp.cookies, opts.now),
        headers: name_value(resp.headers.fields(), opts.empty_lists),
        content: Content {
            size: body_size,
            compression: decoded_size as i64 - body_size as i64,
            mime_type: resp.headers.get("Content-Type").unwrap_or_default(),
        },
        redirect_url: resp.headers.get("Location").unwrap_or_default(),
        headers_size: resp.headers.wire_len(),
        body_size,
    }
}
