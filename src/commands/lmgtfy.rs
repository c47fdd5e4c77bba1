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
        commands::LMGTFY
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(self.name())
                .description("Creates a lmgtfy link.")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        value::SEARCH,
                        "What to search for.",
                    )
                    .required(true),
                ),
        )
        .await?;
        Ok(())
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        let terms = util::get_value(&cmd.data.options, value::SEARCH)
            .and_then(util::value_to_string)
            .context("no search terms specified")?;

        util::respond(http, cmd, Ok(self.engine.lmgtfy(&terms))).await
    }
}
