use clap::{App, Arg, ArgMatches};
use tracing::info;

use crate::config::{self, IssuerConfig, SigningKey, DEFAULT_PARTICIPANTS, DEFAULT_ROOM};
use crate::error::TokenError;
use crate::jwt_core::TokenIssuer;
use crate::types::{IssuedToken, Output, RoomGrant};

pub const QUICK_USAGE: &str = "Usage: room-token-quick <participant_id>\n\nExample: room-token-quick abc123xyz";

fn with_issuer_args<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
    app.arg(
        Arg::with_name("api-key")
            .help("Issuer id (API key) shared with the media server")
            .long("api-key")
            .env("LIVEKIT_API_KEY")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("api-secret")
            .help("Shared secret used to sign tokens")
            .long("api-secret")
            .env("LIVEKIT_API_SECRET")
            .hide_env_values(true)
            .takes_value(true),
    )
    .arg(
        Arg::with_name("room")
            .help("Room the tokens grant access to")
            .short("r")
            .long("room")
            .env("LIVEKIT_ROOM")
            .takes_value(true)
            .default_value(DEFAULT_ROOM),
    )
    .arg(
        Arg::with_name("valid-for")
            .help("Token lifetime in hours")
            .long("valid-for")
            .env("TOKEN_VALIDITY_HOURS")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("url")
            .help("Media server URL to print next to the tokens")
            .long("url")
            .env("LIVEKIT_URL")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("format")
            .help("The output format (text, json)")
            .short("f")
            .long("format")
            .takes_value(true)
            .possible_values(&["text", "json"])
            .default_value("text"),
    )
}

/// Batch mode: one token per configured participant.
pub fn batch_app<'a, 'b>() -> App<'a, 'b> {
    with_issuer_args(
        App::new("room-token")
            .version("1.0")
            .about("Generates room access tokens for multiple participants"),
    )
    .arg(
        Arg::with_name("participants")
            .help("Comma separated participant identities")
            .short("p")
            .long("participants")
            .env("LIVEKIT_PARTICIPANTS")
            .takes_value(true)
            .default_value(DEFAULT_PARTICIPANTS),
    )
}

/// Single mode: one token for the participant given on the command line.
pub fn quick_app<'a, 'b>() -> App<'a, 'b> {
    with_issuer_args(
        App::new("room-token-quick")
            .version("1.0")
            .about("Generates a room access token for a single participant"),
    )
    .arg(
        Arg::with_name("participant")
            .help("Identity of the participant the token is issued for")
            .index(1),
    )
    .arg(
        Arg::with_name("name")
            .help("Display name shown to other participants")
            .short("n")
            .long("name")
            .takes_value(true),
    )
}

pub fn config_from_matches(matches: &ArgMatches) -> Result<IssuerConfig, TokenError> {
    let issuer_id = matches
        .value_of("api-key")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| TokenError::Config("missing API key, set --api-key or LIVEKIT_API_KEY".to_string()))?;
    let secret = matches
        .value_of("api-secret")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| TokenError::Signing("missing API secret, set --api-secret or LIVEKIT_API_SECRET".to_string()))?;

    let mut config = IssuerConfig::new(issuer_id, SigningKey::new(secret));
    if let Some(room) = matches.value_of("room") {
        config.room = room.to_string();
    }
    if let Some(hours) = matches.value_of("valid-for") {
        config.validity_hours = config::parse_validity_hours(hours)?;
    }
    if let Some(participants) = matches.value_of("participants") {
        config.participants = config::parse_participants(participants);
    }
    config.server_url = matches.value_of("url").map(String::from);

    Ok(config)
}

/// The positional participant, or a usage error when it is missing.
pub fn participant_from_matches(matches: &ArgMatches) -> Result<String, TokenError> {
    match matches.value_of("participant") {
        Some(participant) if !participant.is_empty() => Ok(participant.to_string()),
        _ => Err(TokenError::Usage(format!(
            "Error: Missing participant id argument\n\n{}",
            QUICK_USAGE
        ))),
    }
}

fn output_for(config: &IssuerConfig, tokens: Vec<IssuedToken>) -> Output {
    Output {
        room: config.room.clone(),
        valid_for_hours: i64::from(config.validity_hours),
        server_url: config.server_url.clone(),
        tokens,
    }
}

/// Mints every token before returning so a failure yields no partial batch.
pub fn run_batch(config: &IssuerConfig) -> Result<Output, TokenError> {
    if config.participants.is_empty() {
        return Err(TokenError::InvalidInput("no participants configured".to_string()));
    }

    let issuer = TokenIssuer::from_config(config)?;
    let tokens = config
        .participants
        .iter()
        .map(|participant| issuer.issue_for_default_room(participant))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = tokens.len(), room = %config.room, "generated batch tokens");
    Ok(output_for(config, tokens))
}

pub fn run_single(config: &IssuerConfig, participant: &str, name: Option<&str>) -> Result<Output, TokenError> {
    let issuer = TokenIssuer::from_config(config)?;
    let token = issuer.issue_with_grant(
        RoomGrant::full(config.room.as_str()),
        participant,
        config.validity(),
        name,
        chrono::Utc::now(),
    )?;

    info!(participant, room = %config.room, "generated token");
    Ok(output_for(config, vec![token]))
}
