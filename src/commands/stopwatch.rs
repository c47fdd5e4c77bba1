use std::sync::Arc;

use serenity::all::{Command, CommandInteraction, CreateCommand, Http, Mentionable};

use crate::{commands::CommandHandler, constant::commands, engine::Engine, util};

pub struct Handler {
    engine: Arc<Engine>,
}
impl Handler {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }
}

#[serenity::async_trait]
impl CommandHandler for Handler {
    fn name(&self) -> &str {
        commands::STOPWATCH
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(self.name()).description("Starts or stops your stopwatch."),
        )
        .await?;
        Ok(())
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        let mention = cmd.user.mention().to_string();
        let reply = self.engine.stopwatch(cmd.user.id.get(), &mention);
        util::respond(http, cmd, Ok(reply)).await
    }
}
