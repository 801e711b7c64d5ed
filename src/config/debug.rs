//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit seed / tuning info once on startup.
    pub log_startup: bool,

    /// Emit one line per feed tick (count perturbed, tick number).
    pub log_feed_ticks: bool,

    /// Log every sort request and the resulting directive.
    pub log_sort_requests: bool,

    /// Log tab switches and the batch regeneration they trigger.
    pub log_tab_switches: bool,

    /// Log timer arm/expiry when phases change.
    pub log_timer_lifecycle: bool,
}

pub const DF: LogFlags = LogFlags {
    log_startup: true,

    log_tab_switches: true,

    log_feed_ticks: false,
    log_sort_requests: false,
    log_timer_lifecycle: false,
};
