use lazy_static::lazy_static;
use prometheus::{register_counter_vec, register_histogram_vec, CounterVec, HistogramVec};

lazy_static! {
    // ── Event counters ──────────────────────────────────────────────────────
    pub static ref SEARCHES_COUNTER: CounterVec = register_counter_vec!(
        "catalog_searches_total",
        "Search requests by outcome (short, empty, hit)",
        &["outcome"]
    ).unwrap();

    pub static ref SLUG_LOOKUPS_COUNTER: CounterVec = register_counter_vec!(
        "catalog_slug_lookups_total",
        "Slug lookups by entity and result (found, not_found)",
        &["entity", "result"]
    ).unwrap();

    pub static ref CONTACT_COUNTER: CounterVec = register_counter_vec!(
        "contact_submissions_total",
        "Contact form submissions by status",
        &["status"]
    ).unwrap();

    pub static ref QUOTES_COUNTER: CounterVec = register_counter_vec!(
        "configurator_quotes_total",
        "Configurator messages composed by kind",
        &["kind"]
    ).unwrap();

    // ── Latency ─────────────────────────────────────────────────────────────
    pub static ref SEARCH_SECONDS: HistogramVec = register_histogram_vec!(
        "catalog_search_duration_seconds",
        "Time spent in the three-table search fan-out",
        &["outcome"]
    ).unwrap();
}

/// Count a slug lookup outcome.
pub fn record_lookup<T>(entity: &str, row: &Option<T>) {
    let result = if row.is_some() { "found" } else { "not_found" };
    SLUG_LOOKUPS_COUNTER.with_label_values(&[entity, result]).inc();
}
