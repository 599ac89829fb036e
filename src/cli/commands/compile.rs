use anyhow::Result;

use super::{CommandResult, CommandSummary, CompileSummary};
use crate::{
    cli::args::CompileCommand,
    core::{
        BatchContext,
        emit::{json::render_json, wiki::render_wiki},
    },
};

pub fn compile(cmd: CompileCommand) -> Result<CommandResult> {
    let ctx = BatchContext::new(&cmd.args.common)?;
    let loaded = ctx.load()?;

    let json_path = ctx.write_artifact("badwords.json", &render_json(&loaded.table))?;
    let wiki_path = ctx.write_artifact("wiki.txt", &render_wiki(&loaded.table))?;

    Ok(CommandResult {
        summary: CommandSummary::Compile(CompileSummary {
            word_count: loaded.table.len(),
            version_count: loaded.versions.len(),
            files_loaded: loaded.files_loaded,
            json_path,
            wiki_path,
        }),
        warnings: loaded.warnings,
    })
}
