use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;

use vgc_calc::analysis::repeated_hit_survival;
use vgc_calc::{calculate_damage, DamageResult, KoAnalysis, Survival};

use crate::models::{read_request, CalcRequest};
use crate::{emit, GlobalArgs};

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Request file ("-" or omitted reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Also report survival against this many repeated uses
    #[arg(long)]
    pub hits: Option<u8>,
}

#[derive(Serialize)]
struct CalcOutput {
    #[serde(flatten)]
    result: DamageResult,
    range: String,
    ko: KoAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    survival: Option<Survival>,
}

pub fn execute(args: CalcArgs, global: &GlobalArgs) -> Result<()> {
    let request: CalcRequest = read_request(args.input.as_deref())?;
    let attacker = request.attacker.to_build()?;
    let defender = request.defender.to_build()?;
    let mv = request.move_spec.to_move()?;

    let result = calculate_damage(&attacker, &defender, &mv, &request.modifiers)
        .context("damage calculation failed")?;
    info!(
        attacker = %result.attacker,
        defender = %result.defender,
        range = %result.display_range(),
        "calculated"
    );

    let survival = args
        .hits
        .map(|hits| repeated_hit_survival(&result.rolls, hits, result.defender_hp))
        .transpose()
        .context("survival analysis failed")?;

    let output = CalcOutput {
        range: result.display_range(),
        ko: result.ko_analysis(),
        survival,
        result,
    };
    emit(&output, global.pretty)
}
