mod assemble;
mod borrowed;
mod boundaries;
mod parse;
mod types;

pub use self::assemble::assemble;
pub use self::borrowed::IrcMessageRef;
pub use self::boundaries::{scan, Boundaries};
pub use self::parse::{parse, parse_with, Parser};
pub use self::types::IrcMessage;
