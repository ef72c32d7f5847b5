use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use staticd::config::Config;
use staticd::logging;
use staticd::server::{daemon, listener, privilege};

fn main() {
    let mut config = Config::parse();

    logging::init(config.debug);

    if config.chroot {
        let (user, group) = match (config.user.clone(), config.group.clone()) {
            (Some(user), Some(group)) => (user, group),
            _ => {
                error!("--chroot needs both --user and --group");
                process::exit(1);
            }
        };
        if let Err(e) = privilege::setup_env(&config.docroot, &user, &group) {
            error!("{:#}", e);
            process::exit(1);
        }
        // The jail root is the document root from here on; request paths
        // are absolute inside it.
        config.docroot.clear();
    }

    let std_listener = match listener::bind(config.port) {
        Ok(listener) => listener,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    if !config.debug {
        if let Err(e) = daemon::become_daemon() {
            error!("{:#}", e);
            process::exit(1);
        }
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            // Without a runtime there is nothing to run workers on.
            error!("failed to build worker runtime: {}", e);
            process::exit(3);
        }
    };

    let result = runtime.block_on(async {
        let cfg = Arc::new(config);

        tokio::select! {
            res = listener::run(std_listener, cfg) => res,

            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        error!("{:#}", e);
        process::exit(1);
    }
}
