use arena_core::NavMeshOracle;

use super::Bot;

impl Bot {
    /// Moves the bot along its active steering path.
    ///
    /// A stand-in for the external locomotion layer: constant speed towards
    /// the current waypoint, clamped to the navigation mesh.
    pub fn steer(&mut self, delta: f64, nav_mesh: &dyn NavMeshOracle) {
        if !self.is_alive() || !self.navigation.steering().is_active() {
            return;
        }

        let next_waypoint_distance = self.config.bot.navigation.next_waypoint_distance;
        let steering = self.navigation.steering_mut();
        steering.advance(self.position, next_waypoint_distance);
        let Some(waypoint) = steering.current_waypoint() else {
            return;
        };

        let offset = waypoint - self.position;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        let step = (self.config.bot.max_speed * delta as f32).min(distance);
        let direction = offset / distance;
        let proposed = self.position + direction * step;
        let (region, clamped) = nav_mesh.clamp_movement(self.region, self.position, proposed);

        self.position = clamped;
        self.region = region;
        self.forward = direction;
    }
}
