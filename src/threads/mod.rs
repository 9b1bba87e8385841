use poise::serenity_prelude as serenity;
use regex::Regex;

use crate::{Context, Error};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipient_from_topic() {
        let topic = "Jane Doe | User ID: 482996529629773824 | open ticket";

        let recipient = recipient_from_topic(topic).unwrap();

        assert_eq!(recipient, serenity::UserId::new(482996529629773824));
    }

    #[test]
    fn test_topic_without_marker_has_no_recipient() {
        assert_eq!(recipient_from_topic("general chat"), None);
        assert_eq!(recipient_from_topic(""), None);
    }

    #[test]
    fn test_garbage_id_has_no_recipient() {
        assert_eq!(recipient_from_topic("User ID: abc"), None);
        // u64 overflow
        assert_eq!(
            recipient_from_topic("User ID: 99999999999999999999999999"),
            None
        );
    }

    #[test]
    fn test_zero_id_has_no_recipient() {
        assert_eq!(recipient_from_topic("User ID: 0"), None);
    }
}

/// Topic marker the mod-mail bot writes when it opens a support thread
const RECIPIENT_MARKER: &str = r"User ID:\s*(\d+)";

/// Extracts the support-thread recipient from a channel topic.
pub fn recipient_from_topic(topic: &str) -> Option<serenity::UserId> {
    let re = Regex::new(RECIPIENT_MARKER).unwrap();
    let id = re.captures(topic)?.get(1)?.as_str().parse::<u64>().ok()?;

    // UserId is non-zero
    if id == 0 {
        return None;
    }

    Some(serenity::UserId::new(id))
}

/// Resolves the support-thread recipient for the channel the command was
/// invoked in.
///
/// Returns `None` when the channel is not a guild channel, has no topic,
/// or the topic carries no recipient marker. Transport errors from the
/// channel fetch propagate.
pub async fn thread_recipient(ctx: Context<'_>) -> Result<Option<serenity::UserId>, Error> {
    let channel = ctx.channel_id().to_channel(ctx.serenity_context()).await?;

    let topic = match channel {
        serenity::Channel::Guild(channel) => channel.topic,
        _ => return Ok(None),
    };

    Ok(topic.as_deref().and_then(recipient_from_topic))
}
