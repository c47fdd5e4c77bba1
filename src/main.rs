use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::Duration,
};

use anyhow::Context as AnyhowContext;
use serenity::{
    Client,
    all::{Command, Context, EventHandler, Http, Interaction, Ready},
    async_trait,
    model::prelude::GatewayIntents,
};

mod commands;
mod config;
mod constant;
mod engine;
mod util;

use config::Configuration;

use crate::engine::{Engine, UrbanClient};

type Handlers = HashMap<String, Arc<dyn commands::CommandHandler>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Configuration::load()?;
    let discord_token = config
        .authentication
        .discord_token
        .as_deref()
        .context("Expected authentication.discord_token to be filled in config")?;

    let definitions = Arc::new(UrbanClient::new(
        config.urban.endpoint.clone(),
        Duration::from_millis(config.urban.timeout_ms),
    )?);
    let engine = Arc::new(Engine::new(definitions, config.discord.page_length));

    let mut client = Client::builder(discord_token, GatewayIntents::default())
        .event_handler(Handler {
            handlers: Arc::new(build_handlers(engine)),
        })
        .await
        .context("Error creating client")?;

    if let Err(why) = client.start().await {
        tracing::error!("Client error: {why:?}");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,serenity=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn build_handlers(engine: Arc<Engine>) -> Handlers {
    let handlers: Vec<Arc<dyn commands::CommandHandler>> = vec![
        Arc::new(commands::choose::Handler::new(engine.clone())),
        Arc::new(commands::roll::Handler::new(engine.clone())),
        Arc::new(commands::flip::Handler::new(engine.clone())),
        Arc::new(commands::rps::Handler::new(engine.clone())),
        Arc::new(commands::eightball::Handler::new(engine.clone())),
        Arc::new(commands::stopwatch::Handler::new(engine.clone())),
        Arc::new(commands::lmgtfy::Handler::new(engine.clone())),
        Arc::new(commands::hug::Handler::new(engine.clone())),
        Arc::new(commands::urban::Handler::new(engine)),
    ];

    handlers
        .into_iter()
        .map(|h| (h.name().to_string(), h))
        .collect()
}

pub struct Handler {
    handlers: Arc<Handlers>,
}
#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        if let Err(err) = self.ready_impl(&ctx.http, ready).await {
            tracing::error!("Error while registering commands: {err:?}");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(cmd) = interaction else {
            return;
        };

        let name = cmd.data.name.as_str();
        let Some(handler) = self.handlers.get(name).cloned() else {
            tracing::warn!("no handler found for command: {name}");
            return;
        };

        if let Err(err) = handler.run(&ctx.http, &cmd).await {
            tracing::error!(command = name, user = %cmd.user.id, "command failed: {err:?}");
            if let Err(err) = util::create_or_edit(&ctx.http, &cmd, &format!("Error: {err}")).await
            {
                tracing::error!("failed to report error: {err:?}");
            }
        }
    }
}
impl Handler {
    async fn ready_impl(&self, http: &Http, ready: Ready) -> anyhow::Result<()> {
        tracing::info!("{} is connected; registering commands...", ready.user.name);
        register_all_commands(http, &self.handlers).await?;
        tracing::info!("{} is good to go!", ready.user.name);
        Ok(())
    }
}

/// Registers all commands with Discord, clearing existing commands if they differ
async fn register_all_commands(http: &Http, handlers: &Handlers) -> anyhow::Result<()> {
    let registered_commands: HashSet<_> = {
        let cmds = Command::get_global_commands(http).await?;
        cmds.iter().map(|c| c.name.clone()).collect()
    };
    let our_commands: HashSet<_> = handlers.keys().cloned().collect();
    if registered_commands != our_commands {
        Command::set_global_commands(http, vec![]).await?;
    }

    for handler in handlers.values() {
        handler.register(http).await?;
    }

    Ok(())
}
