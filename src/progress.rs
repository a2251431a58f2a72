// src/progress.rs
/// Lightweight progress reporting for the month walk.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before the first fetch.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each page that yielded usable records.
    fn month_done(&mut self, _year: i32, _month: u32, _records: usize) {}

    /// Called when the walk stops, with the consolidated record count.
    fn finish(&mut self, _total: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
