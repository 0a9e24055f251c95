use std::path::PathBuf;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use kura_core::slug::slugify;
use kura_resources::generator::GeneratorEnv;
use kura_resources::{OptionSet, PageFonts, registry, writer};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resources = ctx.db.list_resources().await?;
    output(&resources, flags.format)
}

#[derive(Serialize)]
struct GenerateSummary {
    resource: String,
    subtitle: String,
    pages: usize,
    output_dir: String,
    thumbnail: String,
}

pub async fn generate(
    slug: &str,
    option_pairs: &[String],
    out_dir: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let resource = ctx
        .db
        .get_resource(slug)
        .await
        .with_context(|| format!("unknown resource '{slug}'; run 'kura load resources' first"))?;

    let options = OptionSet::parse_pairs(option_pairs)?;
    let generator = registry::create_generator(&resource.generator, &options)?;

    let fonts = PageFonts::load(&ctx.font_path())?;
    let env = GeneratorEnv {
        static_dir: ctx.static_dir(),
        fonts,
    };

    let pages = generator.generate(&env)?;
    let base_name = slugify(&format!("{} {}", resource.name, generator.subtitle()));
    let out_dir = out_dir.map_or_else(|| ctx.output_dir(), PathBuf::from);

    let bar = page_bar(pages.len() as u64, flags.quiet);
    for (index, page) in pages.iter().enumerate() {
        writer::write_page(page, &out_dir, &base_name, index + 1)?;
        bar.inc(1);
    }
    bar.finish_and_clear();

    let thumbnail =
        writer::copy_thumbnail(&generator.thumbnail_source(&env), &out_dir, &base_name)?;

    output(
        &GenerateSummary {
            resource: resource.slug,
            subtitle: generator.subtitle(),
            pages: pages.len(),
            output_dir: out_dir.display().to_string(),
            thumbnail: thumbnail.display().to_string(),
        },
        flags.format,
    )
}

fn page_bar(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{spinner} writing pages [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
