use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let topics = ctx.db.list_topics().await?;
    output(&topics, flags.format)
}

pub async fn get(slug: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let topic = ctx.db.get_topic(slug).await?;
    output(&topic, flags.format)
}
