use anyhow::Result;
use clap::Parser;

use super::ContentArgs;

/// Load and validate content files
#[derive(Parser)]
pub struct Check {
    #[command(flatten)]
    content: ContentArgs,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let content = self.content.load()?;
        content.config.validate()?;

        let layout = &content.layout;
        println!("config: ok");
        println!(
            "personalities: {}",
            content
                .personalities
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "layout: {}x{} floor, {} spawn points, {} items, {} obstacles",
            layout.width,
            layout.depth,
            layout.spawn_points.len(),
            layout.items.len(),
            layout.obstacles.len()
        );
        Ok(())
    }
}
