use anyhow::Result;

use super::{AnalyzeSummary, CommandResult, CommandSummary};
use crate::{
    cli::{args::AnalyzeCommand, report::print_progress},
    core::{
        AnalysisContext,
        extract::{CallPatterns, scan_usages},
        parsers::definitions::parse_definitions_file,
    },
    report::write_report,
    rules::analyze_usage,
};

/// Run both extraction passes, analyze, and write the markdown report.
///
/// A failure to read the definitions file aborts before anything is written.
pub fn analyze(cmd: AnalyzeCommand) -> Result<CommandResult> {
    let ctx = AnalysisContext::new(&cmd.common)?;
    let config = &ctx.config;

    print_progress("Extracting defined keys...");
    let definitions = parse_definitions_file(&ctx.definitions_path)?;

    print_progress("Scanning source files for key usages...");
    let patterns = CallPatterns::new(&config.lookup_function, &config.param_lookup_function)?;
    let usages = scan_usages(
        &ctx.source_root,
        config.extension(),
        &config.ignores,
        &patterns,
    )?;

    let analysis = analyze_usage(&definitions, &usages.used_keys, &config.reference_locale);

    print_progress(&format!("Writing report: {}", ctx.output_path.display()));
    write_report(
        &ctx.output_path,
        &analysis,
        &usages.used_keys,
        &config.locale_names,
    )?;

    let missing_count = analysis
        .get(&config.reference_locale)
        .map_or(0, |a| a.missing_count());

    Ok(CommandResult {
        summary: CommandSummary::Analyze(AnalyzeSummary {
            analysis,
            locale_names: ctx.config.locale_names.clone(),
            used_key_count: usages.used_keys.len(),
            files_scanned: usages.files_scanned,
            dynamic_call_count: usages.dynamic_call_count,
            warnings: usages.warnings,
            report_path: ctx.output_path.clone(),
        }),
        missing_count,
        exit_on_missing: cmd.strict,
    })
}
