//! Shared constants: endpoints, timer intervals and schedule presets.

/// Id of the element the app mounts on. The backend stamps the initial
/// settings values onto it as `data-initial-*` attributes.
pub const APP_ROOT_ID: &str = "netdash-root";

pub const API_STATS_URL: &str = "/api/stats";
pub const STATUS_PARTIAL_URL: &str = "/partials/status";
pub const SETTINGS_FORM_ACTION: &str = "/settings";
pub const CLEAR_FORM_ACTION: &str = "/settings/clear";

/// Chart data is re-fetched on this fixed interval.
pub const CHART_REFRESH_INTERVAL_MS: u32 = 15_000;
/// The status fragment is polled on this fixed interval.
pub const STATUS_POLL_INTERVAL_MS: u32 = 2_000;
/// Delay between a `refreshChart` event and the refresh it schedules, so a
/// foreground action's write lands before we read.
pub const EVENT_REFRESH_DELAY_MS: u32 = 1_000;
/// Delay before the modal scale-in class is added, so the CSS transition
/// engages after the overlay becomes visible.
pub const MODAL_TRANSITION_DELAY_MS: u32 = 10;

/// Custom event dispatched on `document.body` by external code (e.g. the
/// status fragment after a manual test run) to request a chart refresh.
pub const REFRESH_CHART_EVENT: &str = "refreshChart";

/// Selector value that reveals the free-text cron field.
pub const SCHEDULE_CUSTOM: &str = "custom";

/// Enumerated schedule options: `(cron expression, display label)`.
/// "manual" disables the automated schedule on the backend.
pub const SCHEDULE_PRESETS: &[(&str, &str)] = &[
    ("manual", "Manual only"),
    ("*/15 * * * *", "Every 15 minutes"),
    ("0 * * * *", "Every hour"),
    ("0 */6 * * *", "Every 6 hours"),
    ("0 0 * * *", "Every day at midnight"),
];

/// Whether a cron expression matches one of the enumerated presets exactly.
pub fn is_preset(cron: &str) -> bool {
    SCHEDULE_PRESETS.iter().any(|(value, _)| *value == cron)
}
