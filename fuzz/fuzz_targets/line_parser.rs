//! Fuzz target for line parsing
//!
//! Feeds arbitrary UTF-8 to every parse entry point and checks that the
//! sections returned are always slices of the input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        let msg = tmi_parse::parse(input);
        let _ = input.parse::<tmi_parse::IrcMessage>();

        let borrowed = tmi_parse::IrcMessageRef::parse(input);
        assert!(input.contains(borrowed.command));
        assert!(input.contains(borrowed.params));
        assert_eq!(borrowed.tags.len(), msg.tags().len());
        assert_eq!(borrowed.into_owned(), msg);
    }
});
