use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, IntCounterVec};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "catalog_requests_total",
        "Catalog resolutions by operation",
        &["operation"]
    )
    .expect("register catalog_requests_total")
});

pub static FALLBACK_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "catalog_fallback_total",
        "Catalog resolutions answered from the static dataset",
        &["operation", "reason"]
    )
    .expect("register catalog_fallback_total")
});

/// Why a resolution fell back to the static dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// 存储不可用或查询出错
    StoreError,
    /// 查询成功但没有任何记录
    StoreEmpty,
    /// 按主键/slug 查找未命中
    StoreMiss,
    /// 标识符格式不合法，未发起查询
    InvalidId,
}

impl FallbackReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackReason::StoreError => "store_error",
            FallbackReason::StoreEmpty => "store_empty",
            FallbackReason::StoreMiss => "store_miss",
            FallbackReason::InvalidId => "invalid_id",
        }
    }
}

pub fn record_request(operation: &str) {
    REQUESTS_TOTAL.with_label_values(&[operation]).inc();
}

pub fn record_fallback(operation: &str, reason: FallbackReason) {
    FALLBACK_TOTAL.with_label_values(&[operation, reason.as_str()]).inc();
}

pub fn fallback_count(operation: &str, reason: FallbackReason) -> u64 {
    FALLBACK_TOTAL.with_label_values(&[operation, reason.as_str()]).get()
}
