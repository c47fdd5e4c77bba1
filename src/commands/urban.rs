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
        commands::URBAN
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(self.name())
                .description("Urban Dictionary search.")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        value::SEARCH,
                        "Search terms, optionally followed by a definition number from 1 to 11.",
                    )
                    .required(true),
                ),
        )
        .await?;
        Ok(())
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        let search = util::get_value(&cmd.data.options, value::SEARCH)
            .and_then(util::value_to_string)
            .context("no search terms specified")?;

        // Defer the response as the lookup might take a moment
        cmd.defer(http).await?;

        let result = self.engine.urban(&search).await;
        util::respond_deferred(http, cmd, result).await
    }
}
