use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use vgc_calc::{find_defensive_evs, find_offensive_evs};

use crate::models::{read_request, SearchRequest};
use crate::{emit, GlobalArgs};

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(subcommand)]
    pub kind: SearchKind,
}

#[derive(Subcommand, Debug)]
pub enum SearchKind {
    /// Fewest attacking EVs reaching `target_percent` KO chance in `hits` uses
    Offensive {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Fewest HP + defensive EVs surviving `hits` max rolls
    Defensive {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

pub fn execute(args: SearchArgs, global: &GlobalArgs) -> Result<()> {
    match args.kind {
        SearchKind::Offensive { input } => {
            let request: SearchRequest = read_request(input.as_deref())?;
            let attacker = request.attacker.to_build()?;
            let defender = request.defender.to_build()?;
            let mv = request.move_spec.to_move()?;
            let outcome = find_offensive_evs(
                &attacker,
                &defender,
                &mv,
                &request.modifiers,
                request.target_percent,
                request.hits,
            )
            .context("offensive search failed")?;
            emit(&outcome, global.pretty)
        }
        SearchKind::Defensive { input } => {
            let request: SearchRequest = read_request(input.as_deref())?;
            let attacker = request.attacker.to_build()?;
            let defender = request.defender.to_build()?;
            let mv = request.move_spec.to_move()?;
            let outcome =
                find_defensive_evs(&attacker, &defender, &mv, &request.modifiers, request.hits)
                    .context("defensive search failed")?;
            emit(&outcome, global.pretty)
        }
    }
}
