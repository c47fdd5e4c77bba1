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
        commands::EIGHTBALL
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(self.name())
                .description("Ask 8 ball a question.")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        value::QUESTION,
                        "Must end with a question mark.",
                    )
                    .required(true),
                ),
        )
        .await?;
        Ok(())
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        let question = util::get_value(&cmd.data.options, value::QUESTION)
            .and_then(util::value_to_string)
            .context("no question specified")?;

        let result = self.engine.eightball(&mut rand::thread_rng(), &question);
        util::respond(http, cmd, result).await
    }
}
