// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod inspect;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use flexi_logger::{FileSpec, Logger};

use crate::inspect::{parse_num, show_addr, show_map, show_power_state, show_state, show_suspend};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long)]
    /// Loglevel specification, see
    /// https://docs.rs/flexi_logger/latest/flexi_logger/struct.LogSpecification.html.
    /// If not set, environment variable $RUST_LOG is used.
    pub log_spec: Option<String>,

    #[arg(long)]
    pub log_to_file: bool,

    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a local power state id.
    State { id: String },
    /// Validate the power_state parameter of CPU_SUSPEND.
    Decode { power_state: String },
    /// Show the composite state entered by SYSTEM_SUSPEND.
    Suspend,
    /// Show the peripheral address map, or a single peripheral.
    Map { name: Option<String> },
    /// Find the peripheral at a physical address.
    Addr { addr: String },
}

fn run(cmd: Command) -> Result<String> {
    let out = match cmd {
        Command::State { id } => show_state(parse_num(&id)?)?,
        Command::Decode { power_state } => show_power_state(parse_num(&power_state)?)?,
        Command::Suspend => show_suspend()?,
        Command::Map { name } => show_map(name.as_deref())?,
        Command::Addr { addr } => show_addr(parse_num(&addr)?)?,
    };
    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let logger = if let Some(ref spec) = cli.log_spec {
        Logger::try_with_str(spec)
    } else {
        Logger::try_with_env_or_str("warn")
    }?;
    let logger = if cli.log_to_file {
        logger.log_to_file(
            FileSpec::default()
                .suppress_timestamp()
                .o_directory(cli.log_dir),
        )
    } else {
        logger
    };
    let _handle = logger.start()?;
    log::debug!(
        "{} {} started...",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    print!("{}", run(cli.cmd)?);
    Ok(())
}
