use super::{Boundaries, IrcMessage};
use crate::tags::MessageTag;

/// Combine scanned sections and typed tags into an owned [`IrcMessage`].
///
/// This is where borrowed sections become owned strings. Nothing is
/// re-validated.
pub fn assemble(boundaries: Boundaries<'_>, tags: Vec<MessageTag>) -> IrcMessage {
    IrcMessage {
        tags,
        prefix: boundaries.prefix.to_owned(),
        command: boundaries.command.to_owned(),
        params: boundaries.params.to_owned(),
    }
}
