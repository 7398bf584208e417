//! Speech-shaped handlers: say, announce, cmd, routine.

use echoctl_core::{DeviceCommand, RemoteControl, broadcast, catalog, resolve::resolve};

use crate::cli::{GlobalOpts, TargetOpts};
use crate::error::CliError;
use crate::output;

use super::{CliSession, util};

/// `echoctl say <text>`
pub async fn say(
    session: &CliSession,
    text: &str,
    target: &TargetOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.get().await?;
    let device = resolve(client, session.store(), target.device.as_deref()).await?;
    client
        .send(&device, &DeviceCommand::Speak(text.to_owned()))
        .await?;
    output::success(
        &format!(
            "Saying \"{text}\" on {}",
            output::bold(&device.name, global)
        ),
        global,
    );
    Ok(())
}

/// `echoctl announce <text>` -- fan out to every controllable device.
///
/// Partial failure never aborts the rest; each device gets its own
/// reported outcome, and only a total miss fails the command.
pub async fn announce(
    session: &CliSession,
    text: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let spinner = util::spinner("Announcing...", global);
    let client = session.get().await?;
    let devices = catalog::list_controllable(client).await?;
    if devices.is_empty() {
        spinner.finish_and_clear();
        output::info("No playback-capable devices found.", global);
        return Ok(());
    }

    let outcomes = broadcast::broadcast(
        client,
        devices,
        &DeviceCommand::Announce(text.to_owned()),
    )
    .await;
    spinner.finish_and_clear();

    let delivered = broadcast::delivered(&outcomes);
    let total = outcomes.len();
    for outcome in outcomes.iter().filter(|o| !o.succeeded()) {
        if let Err(ref err) = outcome.result {
            output::failure(&format!("{}: {err}", outcome.device.name), global);
        }
    }

    if delivered == 0 {
        return Err(CliError::Remote {
            message: "announcement failed on every device".into(),
        });
    }

    output::success(
        &format!("Announced to {delivered}/{total} device(s): \"{text}\""),
        global,
    );
    Ok(())
}

/// `echoctl cmd <text>` -- raw text command, as if spoken.
pub async fn text_command(
    session: &CliSession,
    text: &str,
    target: &TargetOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.get().await?;
    let device = resolve(client, session.store(), target.device.as_deref()).await?;
    client
        .send(&device, &DeviceCommand::Text(text.to_owned()))
        .await?;
    output::success(
        &format!("Sent \"{text}\" to {}", output::bold(&device.name, global)),
        global,
    );
    Ok(())
}

/// `echoctl routine <name>`
pub async fn routine(
    session: &CliSession,
    name: &str,
    target: &TargetOpts,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let spinner = util::spinner(&format!("Triggering routine \"{name}\"..."), global);
    let client = session.get().await?;
    let device = resolve(client, session.store(), target.device.as_deref()).await?;

    let automations = client
        .list_automations()
        .await
        .map_err(echoctl_core::CoreError::from)?;
    let Some(automation) = automations.iter().find(|a| a.matches(name)) else {
        spinner.finish_and_clear();
        return Err(CliError::routine_not_found(name));
    };

    client
        .run_automation(
            &device.serial,
            &device.kind,
            device.customer_id.as_deref(),
            automation,
        )
        .await
        .map_err(echoctl_core::CoreError::from)?;
    spinner.finish_and_clear();

    output::success(
        &format!(
            "Routine \"{name}\" triggered on {}",
            output::bold(&device.name, global)
        ),
        global,
    );
    Ok(())
}
