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

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;

use odin_milmon::{
    MilmonConfig, load_config,
    category::{Category,CategorySet},
    fetcher::{Fetcher,FileFetcher,LiveFetcher,fetch_aircraft},
    view,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "one-shot retrieval and classification of military aircraft")]
pub struct Args {
    /// RON config file (built-in defaults if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// read the feed document from a file instead of the configured url
    #[arg(short,long)]
    pub file: Option<PathBuf>,

    /// comma separated categories to show (e.g. "fighter,bomber"), all if not set
    #[arg(short,long, value_delimiter = ',')]
    pub only: Vec<Category>,
}

#[tokio::main]
async fn main()->Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config( path)?,
        None => MilmonConfig::default()
    };

    let fetcher: Box<dyn Fetcher> = match &args.file {
        Some(path) => Box::new( FileFetcher::new( path)),
        None => Box::new( LiveFetcher::new( &config)?)
    };

    let active: CategorySet = if args.only.is_empty() { CategorySet::all() } else { args.only.iter().copied().collect() };

    let aircraft = fetch_aircraft( fetcher.as_ref(), config.fetch_timeout).await?;
    let projection = view::project( &aircraft, active);

    for ac in aircraft.iter().filter( |ac| active.contains( ac.category())) {
        println!("{ac}");
    }
    println!("-- {} of {} aircraft in {}", projection.rows.len(), aircraft.len(), active);

    println!("-- offensive aircraft alerts:");
    println!("{}", projection.alert_text());
    Ok(())
}
