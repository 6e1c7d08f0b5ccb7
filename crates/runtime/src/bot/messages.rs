use arena_core::{ArenaEnv, LifeStatus, Message, Telegram};

use super::Bot;

impl Bot {
    /// Applies one message. Returns whether it was consumed.
    ///
    /// A hit lowers health and refreshes what the bot knows about the
    /// attacker; lethal damage starts dying and tells every other
    /// competitor. A death notice makes the bot forget the sender.
    pub fn handle_message(&mut self, telegram: Telegram, now: f64, env: ArenaEnv<'_>) -> bool {
        match telegram.message {
            Message::Hit {
                damage,
                attacker_position,
            } => {
                if self.status != LifeStatus::Alive {
                    return true;
                }
                self.health -= damage;
                self.stats.hits_taken += 1;

                let record = self.memory.create_record(telegram.sender);
                record.time_last_sensed = now;
                record.last_sensed_position = attacker_position;

                tracing::debug!(
                    bot = %self.id,
                    attacker = %telegram.sender,
                    damage,
                    health = self.health,
                    "hit"
                );

                if self.health <= 0.0 {
                    self.init_death(now, env);
                    self.killer = Some(telegram.sender);
                }
                true
            }
            Message::Dead => {
                self.memory.delete_record(telegram.sender);
                if self.targets.target() == Some(telegram.sender) {
                    self.targets.reset();
                }
                true
            }
        }
    }

    fn init_death(&mut self, now: f64, env: ArenaEnv<'_>) {
        self.status = LifeStatus::Dying;
        self.end_time_dying = now + self.config.bot.dying_time;
        self.stats.deaths += 1;
        self.navigation.reset();
        tracing::info!(bot = %self.id, "bot is dying");

        let competitors = match env.competitors() {
            Ok(competitors) => competitors.competitors(),
            Err(e) => {
                tracing::warn!(bot = %self.id, error = %e, "cannot announce death");
                return;
            }
        };
        for competitor in competitors {
            if competitor.id != self.id {
                self.outbox
                    .push(Telegram::new(self.id, competitor.id, Message::Dead));
            }
        }
    }
}
