//! Playback status display.

use echoctl_core::{CoreError, PlayerInfo, resolve::resolve};
use serde::Serialize;

use crate::cli::{GlobalOpts, TargetOpts};
use crate::error::CliError;
use crate::output;

use super::{CliSession, util};

/// Status snapshot joined with the device it came from.
#[derive(Serialize)]
struct StatusView {
    device: String,
    serial: String,
    #[serde(flatten)]
    info: PlayerInfo,
}

fn detail(view: &StatusView) -> String {
    let state = view
        .info
        .state
        .as_ref()
        .and_then(|s| s.status.as_deref())
        .unwrap_or("UNKNOWN");
    let title = view
        .info
        .info_text
        .as_ref()
        .and_then(|t| t.title.as_deref())
        .unwrap_or("-");
    let artist = view
        .info
        .info_text
        .as_ref()
        .and_then(|t| t.sub_text1.as_deref());
    let volume = view
        .info
        .volume
        .as_ref()
        .and_then(|v| v.volume)
        .map_or_else(|| "?".to_owned(), |v| v.to_string());

    let mut lines = vec![
        format!("Device  : {}", view.device),
        format!("Status  : {state}"),
        format!("Track   : {title}"),
    ];
    if let Some(artist) = artist {
        lines.push(format!("Artist  : {artist}"));
    }
    lines.push(format!("Volume  : {volume}"));
    lines.join("\n")
}

/// `echoctl status`
pub async fn show(
    session: &CliSession,
    target: &TargetOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let spinner = util::spinner("Getting status...", global);
    let client = session.get().await?;
    let device = resolve(client, session.store(), target.device.as_deref()).await?;

    let info = client
        .player_info(&device.serial, &device.kind)
        .await
        .map_err(CoreError::from)?;
    spinner.finish_and_clear();

    let view = StatusView {
        device: device.name,
        serial: device.serial,
        info,
    };

    let out = output::render_single(&global.output, &view, detail, |v| v.serial.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}
