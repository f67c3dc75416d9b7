use clap::Parser;

use crate::{api::HttpShuttleApi, config::ClientConfig, session::SessionStore};

use super::{ShuttleAppError, ShuttleOperation};

/// command line client for the campus shuttle booking service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ShuttleApp {
    /// TOML file with client settings (base_url, timeout, session_file).
    /// SHUTTLE_* environment variables override it.
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// select the shuttle operation to run
    #[command(subcommand)]
    pub op: ShuttleOperation,
}

impl ShuttleApp {
    /// loads configuration, connects the HTTP client and runs the selected operation.
    /// returns the text to show the user.
    pub fn run(&self) -> Result<String, ShuttleAppError> {
        let conf = ClientConfig::load(self.config.as_deref())?;
        log::debug!("using backend {} with timeout {:?}", conf.base_url, conf.timeout);
        let api = HttpShuttleApi::new(&conf.base_url, conf.timeout)?;
        let store = SessionStore::new(conf.session_file.clone());
        self.op.run(&api, &store, &conf, &mut std::io::stdin().lock())
    }
}
