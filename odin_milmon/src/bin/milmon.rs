/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::{fs::File, io, path::PathBuf, sync::{Arc,Mutex}};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use odin_milmon::{
    MilmonConfig, load_config,
    console_ui::ConsoleUI,
    fetcher::{Fetcher,FileFetcher,LiveFetcher},
    monitor::{Monitor,create_monitor_channel,DEFAULT_MONITOR_BOUNDS},
    tui::create_tui,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "terminal dashboard for military aircraft reported by a public ADS-B feed")]
pub struct Args {
    /// RON config file (built-in defaults if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// replay a recorded feed document instead of polling the configured url
    #[arg(short,long)]
    pub file: Option<PathBuf>,

    /// print to stdout instead of running the terminal dashboard
    #[arg(long)]
    pub console: bool,

    /// also print the aircraft table in console mode
    #[arg(long)]
    pub rows: bool,

    /// where diagnostics go while the terminal dashboard is running
    #[arg(long, default_value = "milmon.log")]
    pub log_file: PathBuf,
}

#[tokio::main]
async fn main()->Result<()> {
    let args = Args::parse();
    init_logging( &args)?;

    let config = match &args.config {
        Some(path) => load_config( path)?,
        None => MilmonConfig::default()
    };
    info!("starting milmon with {config:?}");

    let fetcher: Arc<dyn Fetcher> = match &args.file {
        Some(path) => Arc::new( FileFetcher::new( path)),
        None => Arc::new( LiveFetcher::new( &config)?)
    };
    let (hmon,inbox) = create_monitor_channel( DEFAULT_MONITOR_BOUNDS);

    if args.console {
        let hquit = hmon.clone();
        tokio::spawn( async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = hquit.quit().await;
            }
        });
        Monitor::with_channel( config, fetcher, ConsoleUI::new( args.rows), hmon, inbox).run().await?;

    } else {
        let (tuih, tui_task) = create_tui( hmon.clone());
        let monitor_task = tokio::spawn( Monitor::with_channel( config, fetcher, tuih, hmon.clone(), inbox).run());

        let tui_res = tui_task.await?;
        let _ = hmon.quit().await; // the TUI might have terminated on its own
        monitor_task.await??;
        tui_res?;
    }

    info!("milmon terminated");
    Ok(())
}

/// log to stderr in console mode and to a file otherwise (the terminal belongs to the dashboard).
/// The level can be set with RUST_LOG
fn init_logging (args: &Args)->Result<()> {
    if args.console {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter( filter)
            .with_writer( io::stderr)
            .init();
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info"));
        let file = File::create( &args.log_file)?;
        tracing_subscriber::fmt()
            .with_env_filter( filter)
            .with_ansi( false)
            .with_writer( Mutex::new( file))
            .init();
    }
    Ok(())
}
