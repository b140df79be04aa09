//! Well-known Twitch tag names.

pub const BADGES: &str = "badges";
pub const BADGE_INFO: &str = "badge-info";
pub const BITS: &str = "bits";
pub const COLOR: &str = "color";
pub const DISPLAY_NAME: &str = "display-name";
pub const EMOTES: &str = "emotes";
pub const FIRST_MESSAGE: &str = "first-msg";
pub const ID: &str = "id";
pub const LOGIN: &str = "login";
pub const MOD: &str = "mod";
pub const MSG_ID: &str = "msg-id";
pub const ROOM_ID: &str = "room-id";
pub const SUBSCRIBER: &str = "subscriber";
pub const SYSTEM_MSG: &str = "system-msg";
pub const TMI_SENT_TS: &str = "tmi-sent-ts";
pub const USER_ID: &str = "user-id";
pub const VIP: &str = "vip";

pub const BAN_DURATION: &str = "ban-duration";
pub const CUMULATIVE_MONTHS: &str = "msg-param-cumulative-months";
pub const GIFT_MONTHS: &str = "msg-param-gift-months";
pub const MASS_GIFT_COUNT: &str = "msg-param-mass-gift-count";
pub const MONTHS: &str = "msg-param-months";
pub const STREAK_MONTHS: &str = "msg-param-streak-months";
pub const RAID_VIEWER_COUNT: &str = "msg-param-viewerCount";
