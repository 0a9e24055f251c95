//! Curriculum integration loader.

use std::path::Path;

use kura_content::error::ContentError;
use kura_content::markdown::convert_file;
use kura_content::structures::IntegrationStructure;
use kura_content::yaml::{read_yaml, require};
use kura_core::entities::{NewCurriculumIntegration, Topic};

use crate::context::{LoadContext, sibling};
use crate::error::{LoadError, unknown_reference};

pub(crate) async fn load(
    ctx: &mut LoadContext<'_>,
    path: &Path,
    topic: &Topic,
) -> Result<(), LoadError> {
    let entries: Vec<IntegrationStructure> = read_yaml(path)?;

    for entry in &entries {
        let slug = require(entry.slug.clone(), path, "slug")?;
        let md_file = require(entry.md_file.clone(), path, "md-file")?;
        let number = require(entry.number, path, "number")?;

        let doc = convert_file(&sibling(path, &md_file))?;
        let integration = ctx
            .db
            .insert_curriculum_integration(&NewCurriculumIntegration {
                topic_id: topic.id,
                slug,
                number,
                name: doc.title.clone(),
                content: doc.html.clone(),
            })
            .await?;

        for area_slug in &entry.curriculum_areas {
            let area = ctx
                .db
                .get_curriculum_area(area_slug)
                .await
                .map_err(|e| unknown_reference(e, path, "curriculum area", area_slug))?;
            ctx.db.link_integration_area(integration.id, area.id).await?;
        }

        for reference in &entry.prerequisite_lessons {
            let Some((plan_slug, lesson_slug)) = reference.split_once('/') else {
                return Err(ContentError::InvalidValue {
                    path: path.to_path_buf(),
                    field: "prerequisite-lessons".to_string(),
                    expected: "unit-plan-slug/lesson-slug".to_string(),
                }
                .into());
            };
            let plan = ctx
                .db
                .get_unit_plan(topic.id, plan_slug)
                .await
                .map_err(|e| unknown_reference(e, path, "unit plan", plan_slug))?;
            let lesson = ctx
                .db
                .get_lesson(plan.id, lesson_slug)
                .await
                .map_err(|e| unknown_reference(e, path, "lesson", lesson_slug))?;
            ctx.db
                .link_integration_prerequisite_lesson(integration.id, lesson.id)
                .await?;
        }

        ctx.log
            .add(format!("Added Curriculum Integration: {}", integration.name), 1);
    }
    Ok(())
}
