use std::sync::OnceLock;

use axum::http::StatusCode;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

// creates the custom registry and registers the custom metrics
pub fn setup() {
    let registry = registry();
    registry
        .register(Box::new(requests_counter().clone()))
        .expect("Failed registering counter");

    registry
        .register(Box::new(response_time_hist().clone()))
        .expect("Failed registering histogram");
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();

    REGISTRY.get_or_init(Registry::new)
}

fn requests_counter() -> &'static IntCounterVec {
    static REQUESTS: OnceLock<IntCounterVec> = OnceLock::new();

    REQUESTS.get_or_init(|| {
        IntCounterVec::new(
            Opts::new("http_requests", "Handled HTTP requests"),
            &["method", "status"],
        )
        .expect("failed to create metric")
    })
}

fn response_time_hist() -> &'static HistogramVec {
    static RESPONSE_TIME_COLLECTOR: OnceLock<HistogramVec> = OnceLock::new();

    RESPONSE_TIME_COLLECTOR.get_or_init(|| {
        HistogramVec::new(
            HistogramOpts::new("response_time", "Response times in seconds"),
            &["method"],
        )
        .expect("failed to create metric")
    })
}

pub(crate) fn track_request(method: &str, status: StatusCode, response_time: f64) {
    requests_counter()
        .with_label_values(&[method, status.as_str()])
        .inc();

    response_time_hist()
        .with_label_values(&[method])
        .observe(response_time);
}

pub(crate) fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = prometheus::TextEncoder::new();
    let mut metrics = String::new();

    encoder.encode_utf8(&registry().gather(), &mut metrics)?;
    encoder.encode_utf8(&prometheus::gather(), &mut metrics)?;

    Ok(metrics)
}
