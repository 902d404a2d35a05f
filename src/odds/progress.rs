/// Tracks and logs progress of a long-running build.
pub struct Progress {
    total: usize,
    check: usize,
    ticks: usize,
    begin: Instant,
    delta: Instant,
}

impl Progress {
    /// logs roughly `checks` times over `total` ticks.
    pub fn new(total: usize, checks: usize) -> Self {
        let check = (total / checks).max(1);
        let now = Instant::now();
        Self {
            total,
            check,
            ticks: 0,
            begin: now,
            delta: now,
        }
    }

    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks % self.check == 0 || self.ticks == self.total {
            let now = Instant::now();
            let total_t = now.duration_since(self.begin);
            let delta_t = now.duration_since(self.delta);
            self.delta = now;
            log::info!(
                "progress: {:8.0?} {:>10} {:6.2}%   mean {:6.0}/s   last {:6.0}/s",
                total_t,
                self.ticks,
                self.ticks as f32 / self.total as f32 * 100f32,
                self.ticks as f32 / total_t.as_secs_f32(),
                self.check as f32 / delta_t.as_secs_f32(),
            );
        }
    }
}

use std::time::Instant;
