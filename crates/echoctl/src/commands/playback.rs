//! Playback and volume handlers: play, pause, next, prev, vol, mute.
//!
//! Each verb is resolve-then-send: obtain the session, resolve the target
//! device, issue one command through the client.

use echoctl_core::{DeviceCommand, RemoteControl, resolve::resolve};

use crate::cli::{GlobalOpts, MusicService, PlayArgs, TargetOpts};
use crate::error::CliError;
use crate::output;

use super::{CliSession, util};

/// `echoctl play [query]`
pub async fn play(
    session: &CliSession,
    args: PlayArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let label = match &args.query {
        Some(query) => format!("Playing \"{query}\"..."),
        None => "Resuming playback...".to_owned(),
    };
    let spinner = util::spinner(&label, global);

    let client = session.get().await?;
    let device = resolve(client, session.store(), args.target.device.as_deref()).await?;

    match args.query {
        Some(query) => {
            let text = match args.service {
                MusicService::Applemusic => format!("play {query} on Apple Music"),
                MusicService::Spotify => format!("play {query} on Spotify"),
                MusicService::Amazon => format!("play {query}"),
            };
            client.send(&device, &DeviceCommand::Text(text)).await?;
            spinner.finish_and_clear();
            output::success(
                &format!(
                    "Playing \"{query}\" on {}",
                    output::bold(&device.name, global)
                ),
                global,
            );
        }
        None => {
            client.send(&device, &DeviceCommand::Play).await?;
            spinner.finish_and_clear();
            output::success(
                &format!("Resumed on {}", output::bold(&device.name, global)),
                global,
            );
        }
    }
    Ok(())
}

/// `echoctl pause`
pub async fn pause(
    session: &CliSession,
    target: &TargetOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.get().await?;
    let device = resolve(client, session.store(), target.device.as_deref()).await?;
    client.send(&device, &DeviceCommand::Pause).await?;
    output::success(
        &format!("Paused on {}", output::bold(&device.name, global)),
        global,
    );
    Ok(())
}

/// `echoctl next`
pub async fn next(
    session: &CliSession,
    target: &TargetOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.get().await?;
    let device = resolve(client, session.store(), target.device.as_deref()).await?;
    client.send(&device, &DeviceCommand::Next).await?;
    output::success(
        &format!("Skipped on {}", output::bold(&device.name, global)),
        global,
    );
    Ok(())
}

/// `echoctl prev`
pub async fn prev(
    session: &CliSession,
    target: &TargetOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.get().await?;
    let device = resolve(client, session.store(), target.device.as_deref()).await?;
    client.send(&device, &DeviceCommand::Previous).await?;
    output::success(
        &format!("Previous track on {}", output::bold(&device.name, global)),
        global,
    );
    Ok(())
}

/// `echoctl vol <level>` -- the 0-100 range is enforced by clap.
pub async fn volume(
    session: &CliSession,
    level: u8,
    target: &TargetOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.get().await?;
    let device = resolve(client, session.store(), target.device.as_deref()).await?;
    client.send(&device, &DeviceCommand::SetVolume(level)).await?;
    output::success(
        &format!(
            "Volume set to {level} on {}",
            output::bold(&device.name, global)
        ),
        global,
    );
    Ok(())
}

/// `echoctl mute`
pub async fn mute(
    session: &CliSession,
    target: &TargetOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.get().await?;
    let device = resolve(client, session.store(), target.device.as_deref()).await?;
    client.send(&device, &DeviceCommand::SetVolume(0)).await?;
    output::success(
        &format!("Muted {}", output::bold(&device.name, global)),
        global,
    );
    Ok(())
}
