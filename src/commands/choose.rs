use std::sync::Arc;

use anyhow::Context as _;
use serenity::all::{
    Command, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Http,
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
        commands::CHOOSE
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(self.name())
                .description("Chooses between multiple choices.")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        value::CHOICES,
                        "Choices separated by spaces. Use double quotes for choices with spaces.",
                    )
                    .required(true),
                ),
        )
        .await?;
        Ok(())
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        let raw = util::get_value(&cmd.data.options, value::CHOICES)
            .and_then(util::value_to_string)
            .context("no choices specified")?;

        let result = self.engine.choose(&mut rand::thread_rng(), &raw);
        util::respond(http, cmd, result).await
    }
}
