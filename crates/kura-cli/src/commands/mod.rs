//! Command handlers, one module per top-level subcommand.

pub mod init;
pub mod load;
pub mod resource;
pub mod topic;

use crate::cli::{Commands, GlobalFlags, ResourceCommands, TopicCommands};
use crate::context::AppContext;

pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        // Handled in main before the context exists; kept for exhaustiveness.
        Commands::Init(args) => init::run(&args, flags),
        Commands::Load { kind } => load::run(&kind, ctx, flags).await,
        Commands::Topic { action } => match action {
            TopicCommands::List => topic::list(ctx, flags).await,
            TopicCommands::Get { slug } => topic::get(&slug, ctx, flags).await,
        },
        Commands::Resource { action } => match action {
            ResourceCommands::List => resource::list(ctx, flags).await,
            ResourceCommands::Generate {
                slug,
                options,
                out_dir,
            } => resource::generate(&slug, &options, out_dir.as_deref(), ctx, flags).await,
        },
    }
}
