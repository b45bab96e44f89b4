use prometheus_client::{
    encoding::{EncodeLabelSet, EncodeLabelValue},
    metrics::{
        counter::Counter,
        family::Family,
        histogram::{Histogram, exponential_buckets},
    },
    registry::Registry,
};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct MethodLabels {
    pub operation: String,
    pub method: Method,
    pub status: Status,
}

fn duration_histogram() -> Histogram {
    Histogram::new(exponential_buckets(0.005, 2.0, 12))
}

#[derive(Clone, Debug)]
pub struct Metrics {
    requests: Family<MethodLabels, Counter>,
    durations: Family<MethodLabels, Histogram, fn() -> Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            durations: Family::new_with_constructor(duration_histogram as fn() -> Histogram),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "report_requests",
            "Total report engine operations",
            self.requests.clone(),
        );
        registry.register(
            "report_request_duration_seconds",
            "Report engine operation duration in seconds",
            self.durations.clone(),
        );
    }

    pub fn record(&self, operation: &str, method: Method, status: Status, elapsed: f64) {
        let labels = MethodLabels {
            operation: operation.to_string(),
            method,
            status,
        };

        self.requests.get_or_create(&labels).inc();
        self.durations.get_or_create(&labels).observe(elapsed);
    }

    pub fn count(&self, operation: &str, method: Method, status: Status) -> u64 {
        let labels = MethodLabels {
            operation: operation.to_string(),
            method,
            status,
        };
        self.requests.get_or_create(&labels).get()
    }
}
