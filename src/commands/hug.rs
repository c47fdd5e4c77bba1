use std::sync::Arc;

use anyhow::Context as _;
use serenity::all::{
    Command, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Http,
    InteractionContext,
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
        commands::HUG
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(self.name())
                .description("Because everyone likes hugs.")
                .contexts(vec![InteractionContext::Guild])
                .add_option(
                    CreateCommandOption::new(CommandOptionType::User, value::USER, "Who to hug.")
                        .required(true),
                )
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::Integer,
                        value::INTENSITY,
                        "Up to 10 intensity levels.",
                    )
                    .required(false),
                ),
        )
        .await?;
        Ok(())
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        use util::{value_to_integer, value_to_user};

        let options = &cmd.data.options;
        let user_id = util::get_value(options, value::USER)
            .and_then(value_to_user)
            .context("no user specified")?;
        let intensity = util::get_value(options, value::INTENSITY).and_then(value_to_integer);
        let name = util::resolved_display_name(cmd, user_id).context("user was not resolved")?;

        util::respond(http, cmd, Ok(self.engine.hug(&name, intensity))).await
    }
}
