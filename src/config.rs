use clap::Parser;

/// Server configuration, parsed from the command line.
///
/// Immutable after startup; every connection task reads it through an `Arc`.
#[derive(Parser, Debug, Clone)]
#[command(name = "staticd", version, about = "Minimal HTTP/1.x static file daemon")]
pub struct Config {
    /// TCP port to listen on
    #[arg(long, default_value_t = 80)]
    pub port: u16,

    /// Confine the process to a chroot jail rooted at the document root
    #[arg(long)]
    pub chroot: bool,

    /// User to run as after the privilege drop (required with --chroot)
    #[arg(long)]
    pub user: Option<String>,

    /// Group to run as after the privilege drop (required with --chroot)
    #[arg(long)]
    pub group: Option<String>,

    /// Log to stderr and stay in the foreground instead of daemonizing
    #[arg(long)]
    pub debug: bool,

    /// Directory served paths are resolved beneath
    pub docroot: String,
}
