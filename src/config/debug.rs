//! Debugging feature flags.

pub struct LogFlags {
    /// Log every action dispatched to the view store.
    pub log_actions: bool,

    /// Log how long the asset fetch took and how many rows came back.
    pub log_fetch: bool,

    /// Log icon fallbacks (primary icon failed, placeholder failed).
    pub log_icons: bool,
}

pub const DF: LogFlags = LogFlags {
    log_actions: false,
    log_fetch: true,
    log_icons: false,
};
