use std::time::Instant;

use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use roster_cli::pipeline::{OutputTarget, build, ingest, output};
use roster_core::decode_header;
use roster_model::{EmptyIdPolicy, RosterOptions};

use crate::cli::{ConvertArgs, HeadersArgs};
use crate::summary::{apply_table_style, field_cell, tags_cell};
use crate::types::ConvertResult;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let input = &args.input;
    let roster_span = info_span!("roster", input = %input.display());
    let _roster_guard = roster_span.enter();

    let options = RosterOptions::new().with_empty_id_policy(if args.merge_empty_ids {
        EmptyIdPolicy::Merge
    } else {
        EmptyIdPolicy::Separate
    });
    let target = OutputTarget::resolve(input, args.output.as_deref());

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let table = info_span!("ingest").in_scope(|| ingest(input))?;
    info!(
        rows = table.rows().len(),
        columns = table.width(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Build
    // =========================================================================
    let build_start = Instant::now();
    let built = info_span!("build").in_scope(|| build(table, &options))?;
    info!(
        records = built.stats.records,
        merged_rows = built.stats.merged_rows,
        rejected_phones = built.stats.rejected_phones,
        rejected_emails = built.stats.rejected_emails,
        duration_ms = build_start.elapsed().as_millis(),
        "build complete"
    );

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    let written = if args.dry_run {
        info!("dry run, roster not written");
        None
    } else {
        let output_start = Instant::now();
        let written = info_span!("output").in_scope(|| output(&built.roster, &target))?;
        info!(
            records = built.roster.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output complete"
        );
        written
    };

    Ok(ConvertResult {
        input: input.clone(),
        output: written,
        stats: built.stats,
        dry_run: args.dry_run,
        to_stdout: target == OutputTarget::Stdout && !args.dry_run,
    })
}

pub fn run_headers(args: &HeadersArgs) -> Result<()> {
    let table = ingest(&args.input)?;
    let header = decode_header(table.header().unwrap_or_default());
    let mut out = Table::new();
    out.set_header(vec!["#", "Header", "Field", "Tags"]);
    apply_table_style(&mut out);
    for (idx, (raw, column)) in table
        .header()
        .unwrap_or_default()
        .iter()
        .zip(header.columns())
        .enumerate()
    {
        out.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(raw),
            field_cell(column),
            tags_cell(&column.tags),
        ]);
    }
    println!("{out}");
    Ok(())
}
