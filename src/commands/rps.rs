use std::sync::Arc;

use anyhow::Context as _;
use serenity::all::{
    Command, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Http,
    Mentionable,
};

use crate::{
    commands::CommandHandler,
    constant::{commands, value},
    engine::Engine,
    util,
};

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
        commands::RPS
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        // Free text, not fixed choices: the engine rejects unknown moves itself.
        Command::create_global_command(
            http,
            CreateCommand::new(self.name())
                .description("Play rock paper scissors.")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        value::CHOICE,
                        "rock, paper or scissors.",
                    )
                    .required(true),
                ),
        )
        .await?;
        Ok(())
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        let choice = util::get_value(&cmd.data.options, value::CHOICE)
            .and_then(util::value_to_string)
            .context("no move specified")?;
        let mention = cmd.user.mention().to_string();

        let result = self.engine.rps(&mut rand::thread_rng(), &mention, &choice);
        util::respond(http, cmd, result).await
    }
}
