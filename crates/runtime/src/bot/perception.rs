use arena_core::ArenaEnv;

use super::Bot;

impl Bot {
    /// Refreshes memory from line of sight to every other live competitor.
    ///
    /// Records are created on first sight. An entity out of sight keeps its
    /// last sensed position and time.
    pub(super) fn update_vision(&mut self, now: f64, env: ArenaEnv<'_>) {
        let competitors = match env.competitors() {
            Ok(competitors) => competitors,
            Err(e) => {
                tracing::warn!(bot = %self.id, error = %e, "vision update skipped");
                return;
            }
        };

        let eye = self.head_position();
        for view in competitors.competitors() {
            if view.id == self.id || !view.alive {
                continue;
            }
            let visible = self.vision.visible(eye, self.forward, view.head_position);
            self.memory
                .create_record(view.id)
                .observe(now, visible, view.position);
        }
    }
}
