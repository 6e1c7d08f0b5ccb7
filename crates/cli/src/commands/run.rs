use anyhow::Result;
use bot_runtime::Arena;
use clap::Parser;

use super::ContentArgs;

/// Simulate a match
#[derive(Parser)]
pub struct Run {
    #[command(flatten)]
    content: ContentArgs,

    /// Number of bots; personalities are assigned round-robin
    #[arg(short, long, default_value_t = 4)]
    bots: usize,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// Frame length in seconds
    #[arg(short, long, default_value_t = 1.0 / 60.0)]
    delta: f64,

    /// Seed for every random decision in the match
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let content = self.content.load()?;
        let mut arena = Arena::new(content.config, content.layout, self.seed)?;

        for personality in content.personalities.iter().cycle().take(self.bots) {
            arena.spawn_bot(personality.clone());
        }

        tracing::info!(
            bots = self.bots,
            frames = self.frames,
            delta = self.delta,
            seed = self.seed,
            "starting match"
        );
        arena.run(self.frames, self.delta)?;
        tracing::info!(time = arena.now(), "match finished");

        println!(
            "{:<6} {:<12} {:>6} {:>6} {:>6} {:>6} {:>7} {:<10} {:<14}",
            "bot", "personality", "kills", "deaths", "shots", "hits", "health", "goal", "weapon"
        );
        for bot in arena.bots() {
            let stats = bot.stats();
            let goal = bot
                .current_goal()
                .map_or_else(|| "-".to_owned(), |goal| goal.to_string());
            println!(
                "{:<6} {:<12} {:>6} {:>6} {:>6} {:>6} {:>7.1} {:<10} {:<14}",
                bot.id().to_string(),
                bot.personality().name,
                stats.kills,
                stats.deaths,
                stats.shots_fired,
                stats.hits_taken,
                bot.health(),
                goal,
                bot.weapons().current().to_string()
            );
        }
        Ok(())
    }
}
