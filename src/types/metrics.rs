/// Timing for the most recent query pass. Overwritten each pass, never
/// accumulated.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryMetrics {
    pub last_query_duration_ms: f64,
}

impl QueryMetrics {
    pub fn update_query(&mut self, duration: f64) {
        if duration >= 0.0 {
            self.last_query_duration_ms = duration;
        }
    }
}
