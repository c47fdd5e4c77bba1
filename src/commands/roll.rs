use std::sync::Arc;

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
        commands::ROLL
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(self.name())
                .description("Rolls a random number between 1 and the number given.")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::Integer,
                        value::NUMBER,
                        "The highest number to roll. Defaults to 100.",
                    )
                    .required(false),
                ),
        )
        .await?;
        Ok(())
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        let max =
            util::get_value(&cmd.data.options, value::NUMBER).and_then(util::value_to_integer);
        let mention = cmd.user.mention().to_string();

        let result = self.engine.roll(&mut rand::thread_rng(), &mention, max);
        util::respond(http, cmd, result).await
    }
}
