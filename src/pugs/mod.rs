use poise::serenity_prelude as serenity;

pub mod commands;

/// Name of the managed role. The role must already exist in the guild;
/// the bot never creates or deletes it.
pub const ROLE_NAME: &str = "PUGS";

/// Where the target member of a role command comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTarget {
    /// Caller named the user as a command argument
    Explicit(serenity::UserId),
    /// Recipient of the support thread the command was invoked in
    ThreadRecipient(serenity::UserId),
    /// No argument and no usable thread recipient
    Unresolved,
}

/// Picks the target member for a role command. An explicit argument
/// always wins over the thread recipient.
pub fn resolve_target(
    explicit: Option<serenity::UserId>,
    thread_recipient: Option<serenity::UserId>,
) -> RoleTarget {
    match (explicit, thread_recipient) {
        (Some(user_id), _) => RoleTarget::Explicit(user_id),
        (None, Some(user_id)) => RoleTarget::ThreadRecipient(user_id),
        (None, None) => RoleTarget::Unresolved,
    }
}

/// Finds a role by exact name in a guild's role set. Role names are not
/// unique on the platform; the first match is used.
pub fn find_role_id<'a, I>(roles: I, name: &str) -> Option<serenity::RoleId>
where
    I: IntoIterator<Item = (serenity::RoleId, &'a str)>,
{
    roles
        .into_iter()
        .find(|(_, role_name)| *role_name == name)
        .map(|(role_id, _)| role_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64) -> serenity::UserId {
        serenity::UserId::new(id)
    }

    fn role(id: u64) -> serenity::RoleId {
        serenity::RoleId::new(id)
    }

    #[test]
    fn test_explicit_argument_wins_over_recipient() {
        let target = resolve_target(Some(user(1)), Some(user(2)));
        assert_eq!(target, RoleTarget::Explicit(user(1)));
    }

    #[test]
    fn test_recipient_used_without_argument() {
        let target = resolve_target(None, Some(user(2)));
        assert_eq!(target, RoleTarget::ThreadRecipient(user(2)));
    }

    #[test]
    fn test_unresolved_without_argument_or_recipient() {
        assert_eq!(resolve_target(None, None), RoleTarget::Unresolved);
    }

    #[test]
    fn test_find_role_by_exact_name() {
        let roles = vec![(role(10), "Mods"), (role(11), "PUGS"), (role(12), "Subs")];
        assert_eq!(find_role_id(roles, ROLE_NAME), Some(role(11)));
    }

    #[test]
    fn test_find_role_is_case_sensitive() {
        let roles = vec![(role(10), "pugs"), (role(11), "Pugs")];
        assert_eq!(find_role_id(roles, ROLE_NAME), None);
    }

    #[test]
    fn test_find_role_first_match_wins() {
        let roles = vec![(role(10), "PUGS"), (role(11), "PUGS")];
        assert_eq!(find_role_id(roles, ROLE_NAME), Some(role(10)));
    }
}
