// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

use anyhow::{Context as _, Result};

use super::*;
use crate::{command, command_match, message::Message};

command! {
    /// A command without arguments
    ("QUIT" => Quit())
}

command! {
    ("TRIPLE" => Triple(first, second, third))
}

#[test]
fn ping_command() -> Result<()> {
    let message = Message::try_from("PING :test.host.com")?;
    let Ping(host) = message.command().context("Invalid ping command.")?;

    assert_eq!("test.host.com", host);
    Ok(())
}

#[test]
fn pong_command() -> Result<()> {
    let message = Message::try_from("PONG :test.host.com")?;
    let Pong(host) = message.command().context("Invalid pong command.")?;

    assert_eq!("test.host.com", host);
    Ok(())
}

#[test]
fn privmsg_command() -> Result<()> {
    let message = Message::try_from("PRIVMSG #channel :This is a message!")?;
    let PrivMsg(target, text) = message.command().context("Invalid privmsg command.")?;

    assert_eq!("#channel", target);
    assert_eq!("This is a message!", text);
    Ok(())
}

#[test]
fn notice_command() -> Result<()> {
    let message = Message::try_from(":server NOTICE * :*** Looking up your hostname")?;
    let Notice(target, text) = message.command().context("Invalid notice command.")?;

    assert_eq!("*", target);
    assert_eq!("*** Looking up your hostname", text);
    Ok(())
}

#[test]
fn join_part_and_nick_commands() -> Result<()> {
    let message = Message::try_from(":nick!user@host JOIN #channel")?;
    let Join(channel) = message.command().context("Invalid join command.")?;
    assert_eq!("#channel", channel);

    let message = Message::try_from(":nick!user@host PART #channel :bye")?;
    let Part(channel) = message.command().context("Invalid part command.")?;
    assert_eq!("#channel", channel);

    let message = Message::try_from(":nick!user@host NICK :newnick")?;
    let Nick(nickname) = message.command().context("Invalid nick command.")?;
    assert_eq!("newnick", nickname);
    Ok(())
}

#[test]
fn numeric_commands() -> Result<()> {
    let message = Message::try_from("001 robots :our overlords")?;
    let Welcome(user, text) = message.command().context("Invalid welcome command.")?;
    assert_eq!(("robots", "our overlords"), (user, text));

    let message = Message::try_from("002 robots :our overlords")?;
    let YourHost(user, text) = message.command().context("Invalid your host command.")?;
    assert_eq!(("robots", "our overlords"), (user, text));

    let message = Message::try_from("003 robots :our overlords")?;
    let Created(user, text) = message.command().context("Invalid created command.")?;
    assert_eq!(("robots", "our overlords"), (user, text));

    let message = Message::try_from("004 robots :our overlords")?;
    let ServerInfo(user, text) = message.command().context("Invalid server info command.")?;
    assert_eq!(("robots", "our overlords"), (user, text));
    Ok(())
}

#[test]
fn mismatching_name_does_not_match() -> Result<()> {
    let message = Message::try_from("PONG :test.host.com")?;

    assert_eq!(None, message.command::<Ping<'_>>());
    // Command names are compared exactly.
    let message = Message::try_from("ping :test.host.com")?;
    assert_eq!(None, message.command::<Ping<'_>>());
    Ok(())
}

#[test]
fn missing_arguments_do_not_match() -> Result<()> {
    let message = Message::try_from("PRIVMSG #channel")?;

    assert_eq!(None, message.command::<PrivMsg<'_>>());
    Ok(())
}

#[test]
fn surplus_arguments_are_ignored() -> Result<()> {
    let message = Message::try_from("TRIPLE a b c d")?;
    let Triple(first, second, third) = message.command().context("Invalid triple command.")?;

    assert_eq!(("a", "b", "c"), (first, second, third));
    Ok(())
}

#[test]
fn command_without_arguments() -> Result<()> {
    let message = Message::try_from("QUIT")?;
    assert_eq!(Some(Quit), message.command::<Quit>());

    let message = Message::try_from("QUIT :leaving")?;
    assert_eq!(Some(Quit), message.command::<Quit>());
    Ok(())
}

#[test]
fn names_reply_command() -> Result<()> {
    let message = Message::try_from("353 = #test :robot1 robot2 robot3")?;
    let NamesReply(channel_type, channel, users) =
        message.command().context("Invalid names reply command.")?;

    assert_eq!(NamesReplyChannelType::Public, channel_type);
    assert_eq!("#test", channel);
    assert_eq!(vec!["robot1", "robot2", "robot3"], users);
    Ok(())
}

#[test]
fn names_reply_channel_types() -> Result<()> {
    for (input, expected) in [
        ("353 me @ #test :a", NamesReplyChannelType::Secret),
        ("353 me * #test :a", NamesReplyChannelType::Private),
        ("353 me = #test :a", NamesReplyChannelType::Public),
        ("353 #test :a", NamesReplyChannelType::Other),
    ] {
        let message = Message::try_from(input)?;
        let NamesReply(channel_type, channel, _) =
            message.command().context("Invalid names reply command.")?;
        assert_eq!(expected, channel_type);
        assert_eq!("#test", channel);
    }
    Ok(())
}

#[test]
fn end_names_reply_command() -> Result<()> {
    let message = Message::try_from("366 me #test :End of /NAMES list.")?;
    let EndNamesReply(channel, text) =
        message.command().context("Invalid end names reply command.")?;

    assert_eq!("#test", channel);
    assert_eq!("End of /NAMES list.", text);
    Ok(())
}

#[test]
fn command_match_picks_the_first_matching_arm() -> Result<()> {
    let describe = |message: &Message| {
        command_match! {
            message => {
                Ping(host) => format!("ping {host}"),
                PrivMsg(target, text) => format!("{target} {text}"),
                other => format!("unknown {}", other.raw_command())
            }
        }
    };

    assert_eq!("ping a", describe(&Message::try_from("PING a")?));
    assert_eq!("#b c", describe(&Message::try_from("PRIVMSG #b :c")?));
    assert_eq!("unknown JOIN", describe(&Message::try_from("JOIN #d")?));
    Ok(())
}
