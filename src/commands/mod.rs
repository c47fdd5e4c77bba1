use serenity::all::{CommandInteraction, Http};

pub mod choose;
pub mod eightball;
pub mod flip;
pub mod hug;
pub mod lmgtfy;
pub mod roll;
pub mod rps;
pub mod stopwatch;
pub mod urban;

#[serenity::async_trait]
pub trait CommandHandler: Send + Sync {
    fn name(&self) -> &str;
    async fn register(&self, http: &Http) -> anyhow::Result<()>;
    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()>;
}
