use kura_loaders::{LoadContext, LoadKind};

use crate::cli::{GlobalFlags, LoadCommands};
use crate::context::AppContext;

pub async fn run(
    kind: &LoadCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = match kind {
        LoadCommands::All => LoadKind::All,
        LoadCommands::CurriculumAreas => LoadKind::CurriculumAreas,
        LoadCommands::LearningOutcomes => LoadKind::LearningOutcomes,
        LoadCommands::AgeGroups => LoadKind::AgeGroups,
        LoadCommands::ClassroomResources => LoadKind::ClassroomResources,
        LoadCommands::Glossary => LoadKind::Glossary,
        LoadCommands::Resources => LoadKind::Resources,
        LoadCommands::Topics => LoadKind::Topics,
    };

    let mut load_ctx = LoadContext::new(&ctx.db, ctx.content_dir(), ctx.static_dir());
    let result = kura_loaders::run(&mut load_ctx, kind).await;

    if !flags.quiet {
        print!("{}", load_ctx.log.render());
    }
    result.map_err(anyhow::Error::from)
}
