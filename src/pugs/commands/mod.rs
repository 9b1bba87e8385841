use poise::serenity_prelude as serenity;
use serenity::Mentionable;
use tracing::info;

use crate::pugs::{self, RoleTarget};
use crate::threads;
use crate::{Context, Error};

/// Which way a role command moves the membership relation.
#[derive(Debug, Clone, Copy)]
enum RoleChange {
    Give,
    Remove,
}

/// Gives the PUGS role to a user, or to the current thread's recipient
#[poise::command(slash_command, prefix_command, guild_only, check = "is_administrator")]
pub async fn givepugsrole(
    ctx: Context<'_>,
    #[description = "User to give the role to"] user: Option<serenity::User>,
) -> Result<(), Error> {
    apply_role_change(ctx, user, RoleChange::Give).await
}

/// Removes the PUGS role from a user, or from the current thread's recipient
#[poise::command(slash_command, prefix_command, guild_only, check = "is_administrator")]
pub async fn removepugsrole(
    ctx: Context<'_>,
    #[description = "User to remove the role from"] user: Option<serenity::User>,
) -> Result<(), Error> {
    apply_role_change(ctx, user, RoleChange::Remove).await
}

/// Permission gate shared by both commands. Slash invocations carry the
/// member permissions; prefix invocations fall back to the cached guild.
async fn is_administrator(ctx: Context<'_>) -> Result<bool, Error> {
    let Some(member) = ctx.author_member().await else {
        return Ok(false);
    };

    if let Some(perms) = member.permissions {
        return Ok(perms.administrator());
    }

    let Some(guild) = ctx.guild() else {
        return Ok(false);
    };
    Ok(guild.member_permissions(&member).administrator())
}

/// Shared body of `givepugsrole` and `removepugsrole`.
///
/// Guard order: role lookup, target resolution, member lookup, membership
/// check. Every early exit replies in chat and performs no mutation; only
/// transport errors propagate.
async fn apply_role_change(
    ctx: Context<'_>,
    user: Option<serenity::User>,
    change: RoleChange,
) -> Result<(), Error> {
    // Roles live in the configured guild, which is not necessarily the
    // guild the command was invoked in
    let guild_id = ctx.data().config.guild();

    let roles = guild_id.roles(ctx.http()).await?;
    let role_id = pugs::find_role_id(
        roles.iter().map(|(role_id, role)| (*role_id, role.name.as_str())),
        pugs::ROLE_NAME,
    );
    let Some(role_id) = role_id else {
        ctx.say(format!("Error: '{}' role does not exist", pugs::ROLE_NAME))
            .await?;
        return Ok(());
    };

    // Thread context is only consulted when no user was named explicitly
    let thread_recipient = match user {
        Some(_) => None,
        None => threads::thread_recipient(ctx).await?,
    };
    let user_id = match pugs::resolve_target(user.map(|u| u.id), thread_recipient) {
        RoleTarget::Explicit(user_id) | RoleTarget::ThreadRecipient(user_id) => user_id,
        RoleTarget::Unresolved => {
            ctx.say("Not in a valid thread. Specify the user argument explicitly instead.")
                .await?;
            return Ok(());
        }
    };

    let mut member = match guild_id.member(ctx.http(), user_id).await {
        Ok(member) => member,
        Err(::serenity::Error::Http(::serenity::http::HttpError::UnsuccessfulRequest(resp)))
            if resp.status_code == 404 =>
        {
            ctx.say("User not found").await?;
            return Ok(());
        }
        Err(other) => return Err(other.into()),
    };

    // Best-effort read of the freshly fetched member; a concurrent
    // invocation against the same member may race, and the platform
    // treats a duplicate add/remove as a no-op
    let has_role = member.roles.contains(&role_id);

    match change {
        RoleChange::Give => {
            if has_role {
                ctx.say(format!("User already has the {} role", pugs::ROLE_NAME))
                    .await?;
                return Ok(());
            }

            member.add_role(ctx.http(), role_id).await?;
            info!("Added {} role to user {}", pugs::ROLE_NAME, member.user.id);

            ctx.say(format!(
                "PUGs role assigned to user {} ({}) successfully",
                member.mention(),
                member.user.id
            ))
            .await?;
        }
        RoleChange::Remove => {
            if !has_role {
                ctx.say(format!("User does not have the {} role", pugs::ROLE_NAME))
                    .await?;
                return Ok(());
            }

            member.remove_role(ctx.http(), role_id).await?;
            info!("Removed {} role from user {}", pugs::ROLE_NAME, member.user.id);

            ctx.say(format!(
                "PUGs role removed from user {} ({}) successfully",
                member.mention(),
                member.user.id
            ))
            .await?;
        }
    }

    Ok(())
}
