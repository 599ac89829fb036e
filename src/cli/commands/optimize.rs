use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, LanguageReduction, OptimizeSummary};
use crate::{
    cli::args::OptimizeCommand,
    core::{BatchContext, Language, emit::plain::render_plain, minimize},
};

pub fn optimize(cmd: OptimizeCommand) -> Result<CommandResult> {
    let ctx = BatchContext::new(&cmd.args.common)?;
    let loaded = ctx.load()?;

    let languages: Vec<Language> = if cmd.args.language.is_empty() {
        loaded.languages().into_iter().collect()
    } else {
        cmd.args
            .language
            .iter()
            .map(|code| {
                Language::from_code(code)
                    .ok_or_else(|| anyhow::anyhow!("Unknown language code: \"{}\"", code))
            })
            .collect::<Result<_>>()?
    };

    if languages.is_empty() {
        bail!("No language lists found under {}", ctx.lists_root.display());
    }

    let mut warnings = loaded.warnings.clone();
    let mut reductions = Vec::new();

    for language in languages {
        let words = loaded.words_for(language);
        if words.is_empty() {
            continue;
        }

        let mut result = minimize(&words);
        warnings.append(&mut result.warnings);

        let path = ctx.write_artifact(
            &format!("badwords_{language}.txt"),
            &render_plain(&result.kept),
        )?;

        reductions.push(LanguageReduction {
            language,
            before: words.len(),
            after: result.kept.len(),
            path,
            removals: result.removals,
        });
    }

    Ok(CommandResult {
        summary: CommandSummary::Optimize(OptimizeSummary {
            reductions,
            files_loaded: loaded.files_loaded,
        }),
        warnings,
    })
}
