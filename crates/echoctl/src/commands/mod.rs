//! Command dispatch: bridges CLI args -> core operations -> output.

pub mod auth;
pub mod devices;
pub mod playback;
pub mod speak;
pub mod status;
pub mod util;

use echoctl_config::FileStore;
use echoctl_core::{ApiBackend, SessionManager};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// The concrete session type every handler works against.
pub type CliSession = SessionManager<ApiBackend, FileStore>;

/// Dispatch a session-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    session: &CliSession,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Devices => devices::list(session, global).await,
        Command::Default { name } => devices::set_default(session, &name, global).await,
        Command::Play(args) => playback::play(session, args, global).await,
        Command::Pause(target) => playback::pause(session, &target, global).await,
        Command::Next(target) => playback::next(session, &target, global).await,
        Command::Prev(target) => playback::prev(session, &target, global).await,
        Command::Vol { level, target } => playback::volume(session, level, &target, global).await,
        Command::Mute(target) => playback::mute(session, &target, global).await,
        Command::Say { text, target } => speak::say(session, &text, &target, global).await,
        Command::Announce { text } => speak::announce(session, &text, global).await,
        Command::Cmd { text, target } => speak::text_command(session, &text, &target, global).await,
        Command::Routine { name, target } => speak::routine(session, &name, &target, global).await,
        Command::Status(target) => status::show(session, &target, global).await,
        // Auth, Logout, and Completions are handled before dispatch
        Command::Auth(_) | Command::Logout | Command::Completions(_) => unreachable!(),
    }
}
