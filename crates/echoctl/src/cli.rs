//! Clap derive structures for the `echoctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// echoctl -- control your smart speakers from the command line
#[derive(Debug, Parser)]
#[command(
    name = "echoctl",
    version,
    about = "Control voice-assistant smart speakers from the command line",
    long_about = "Send playback, volume, speech, and announcement commands to the\n\
        smart speakers on your account. Credentials are captured once with\n\
        `echoctl auth` and reused for every command.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ECHOCTL_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "ECHOCTL_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,

    /// Service host override (e.g. alexa.amazon.com)
    #[arg(long, env = "ECHOCTL_SERVICE_HOST", global = true)]
    pub service_host: Option<String>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Shared argument groups ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Args)]
pub struct TargetOpts {
    /// Target device (name substring or serial)
    #[arg(long, short = 'd')]
    pub device: Option<String>,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a session cookie captured from the vendor's web login
    Auth(AuthArgs),

    /// Remove saved credentials
    Logout,

    /// List playback-capable devices on the account
    #[command(alias = "dev", alias = "ls")]
    Devices,

    /// Set the default target device
    Default {
        /// Device name or serial
        name: String,
    },

    /// Play music, or resume playback
    Play(PlayArgs),

    /// Pause playback
    Pause(TargetOpts),

    /// Skip to the next track
    Next(TargetOpts),

    /// Return to the previous track
    Prev(TargetOpts),

    /// Set volume (0-100)
    Vol {
        /// Volume level
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,

        #[command(flatten)]
        target: TargetOpts,
    },

    /// Mute the device (volume 0)
    Mute(TargetOpts),

    /// Speak a phrase on a device (TTS)
    Say {
        /// Text to speak
        text: String,

        #[command(flatten)]
        target: TargetOpts,
    },

    /// Announce to every device
    Announce {
        /// Announcement text
        text: String,
    },

    /// Send a raw text command, as if spoken to the device
    Cmd {
        /// Command text
        text: String,

        #[command(flatten)]
        target: TargetOpts,
    },

    /// Trigger a named routine
    Routine {
        /// Routine name or trigger phrase
        name: String,

        #[command(flatten)]
        target: TargetOpts,
    },

    /// Show current playback status
    Status(TargetOpts),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Per-command argument structs ─────────────────────────────────────

#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Session cookie blob (prompts when omitted)
    #[arg(long, env = "ECHOCTL_COOKIE", hide_env = true)]
    pub cookie: Option<String>,

    /// csrf token (derived from the cookie when omitted)
    #[arg(long)]
    pub csrf: Option<String>,
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// What to play; omit to resume playback
    pub query: Option<String>,

    /// Music service to route the request to
    #[arg(long, short = 's', default_value = "applemusic")]
    pub service: MusicService,

    #[command(flatten)]
    pub target: TargetOpts,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MusicService {
    Applemusic,
    Spotify,
    Amazon,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
