use std::sync::Arc;

use serenity::all::{
    Command, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Http,
};

use crate::{
    commands::CommandHandler,
    constant::{commands, value},
    engine::{Engine, FlipTarget},
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
        commands::FLIP
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(self.name())
                .description("Flips a coin... or a user.")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::User,
                        value::USER,
                        "Who to flip instead of a coin.",
                    )
                    .required(false),
                ),
        )
        .await?;
        Ok(())
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        let Some(user_id) =
            util::get_value(&cmd.data.options, value::USER).and_then(util::value_to_user)
        else {
            let reply = self.engine.flip(&mut rand::thread_rng(), None);
            return util::respond(http, cmd, Ok(reply)).await;
        };

        let bot_id = http.get_current_user().await?.id;
        let display_name = util::resolved_display_name(cmd, user_id).unwrap_or_default();
        let author_name = util::author_display_name(cmd);
        let target = FlipTarget {
            display_name: &display_name,
            is_bot: user_id == bot_id,
            author_name: &author_name,
        };

        let reply = self.engine.flip(&mut rand::thread_rng(), Some(target));
        util::respond(http, cmd, Ok(reply)).await
    }
}
