use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vgc_calc::{run_bulk, BulkOptions, BulkRequest, Type};

use crate::models::{read_request, BulkRequestSpec};
use crate::{emit, GlobalArgs};

#[derive(Args, Debug)]
pub struct BulkArgs {
    /// Request file ("-" or omitted reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Worker threads (defaults to the global rayon pool)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

pub fn execute(args: BulkArgs, global: &GlobalArgs) -> Result<()> {
    let spec: BulkRequestSpec = read_request(args.input.as_deref())?;

    let attacker = spec.attacker.to_build()?;
    let moves = spec
        .moves
        .iter()
        .map(|m| m.to_move())
        .collect::<Result<Vec<_>>>()?;
    let defenders = spec
        .defenders
        .iter()
        .map(|d| d.to_build())
        .collect::<Result<Vec<_>>>()?;

    let mut request = BulkRequest::new(attacker, moves, defenders);
    if let Some(scenarios) = spec.scenarios {
        request = request.with_scenarios(scenarios);
    }
    for (defender, tera) in &spec.defender_tera {
        let tera = Type::parse(tera)
            .with_context(|| format!("invalid tera type for defender {defender}"))?;
        request = request.with_defender_tera(defender.as_str(), tera);
    }

    let report = run_bulk(&request, &BulkOptions { threads: args.threads })
        .context("bulk calculation failed")?;
    emit(&report, global.pretty)
}
