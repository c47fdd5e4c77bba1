use serenity::all::*;

use crate::engine::{CommandResult, Reply};

pub fn get_value<'a>(
    options: &'a [CommandDataOption],
    name: &str,
) -> Option<&'a CommandDataOptionValue> {
    options.iter().find(|o| o.name == name).map(|o| &o.value)
}

pub fn value_to_string(v: &CommandDataOptionValue) -> Option<String> {
    match v {
        CommandDataOptionValue::String(s) => Some(s.clone()),
        _ => None,
    }
}

pub fn value_to_integer(v: &CommandDataOptionValue) -> Option<i64> {
    match v {
        CommandDataOptionValue::Integer(i) => Some(*i),
        _ => None,
    }
}

pub fn value_to_user(v: &CommandDataOptionValue) -> Option<UserId> {
    match v {
        CommandDataOptionValue::User(id) => Some(*id),
        _ => None,
    }
}

/// Server nickname if there is one, otherwise the user's own display name.
pub fn resolved_display_name(cmd: &CommandInteraction, user_id: UserId) -> Option<String> {
    let user = cmd.data.resolved.users.get(&user_id)?;
    let nick = cmd
        .data
        .resolved
        .members
        .get(&user_id)
        .and_then(|m| m.nick.clone());
    Some(nick.unwrap_or_else(|| user.display_name().to_string()))
}

pub fn author_display_name(cmd: &CommandInteraction) -> String {
    match &cmd.member {
        Some(member) => member.display_name().to_string(),
        None => cmd.user.display_name().to_string(),
    }
}

/// Only the users named in a reply get pinged.
fn allowed_mentions() -> CreateAllowedMentions {
    CreateAllowedMentions::new().all_users(true)
}

/// Sends an engine result: the reply's pages, or the error's user-facing text.
pub async fn respond(
    http: &Http,
    cmd: &CommandInteraction,
    result: CommandResult,
) -> anyhow::Result<()> {
    deliver(http, cmd, &to_reply(result), false).await
}

/// Like [`respond`], for an interaction that was already deferred.
pub async fn respond_deferred(
    http: &Http,
    cmd: &CommandInteraction,
    result: CommandResult,
) -> anyhow::Result<()> {
    deliver(http, cmd, &to_reply(result), true).await
}

fn to_reply(result: CommandResult) -> Reply {
    result.unwrap_or_else(|err| Reply::Text(err.to_string()))
}

async fn deliver(
    http: &Http,
    cmd: &CommandInteraction,
    reply: &Reply,
    deferred: bool,
) -> anyhow::Result<()> {
    let mut pages = reply.pages();
    let first = pages.next().unwrap_or("\u{200b}");

    if deferred {
        cmd.edit_response(
            http,
            EditInteractionResponse::new()
                .content(first)
                .allowed_mentions(allowed_mentions()),
        )
        .await?;
    } else {
        cmd.create_response(
            http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(first)
                    .allowed_mentions(allowed_mentions()),
            ),
        )
        .await?;
    }

    for page in pages {
        cmd.create_followup(
            http,
            CreateInteractionResponseFollowup::new()
                .content(page)
                .allowed_mentions(allowed_mentions()),
        )
        .await?;
    }

    Ok(())
}

/// Reports a failure on the interaction, whether or not it has been answered yet.
pub async fn create_or_edit(
    http: &Http,
    cmd: &CommandInteraction,
    message: &str,
) -> anyhow::Result<()> {
    Ok(if let Ok(mut msg) = cmd.get_response(http).await {
        msg.edit(http, EditMessage::new().content(message)).await?
    } else {
        cmd.create_response(
            http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(message),
            ),
        )
        .await?
    })
}
