//! Lesson loader.
//!
//! The lessons structure file is keyed by age-group slug; the same lesson
//! may appear under several age groups, each with its own lesson number.
//! The lesson row and its links are created on first sight, later age
//! groups only add a `lesson_numbers` entry.

use std::path::Path;

use kura_content::markdown::convert_file;
use kura_content::structures::{LessonStructure, LessonsStructure};
use kura_content::yaml::{read_yaml, require};
use kura_core::entities::{Lesson, NewLesson, Topic, UnitPlan};
use kura_db::error::DatabaseError;

use crate::context::{LoadContext, sibling};
use crate::error::{LoadError, unknown_reference};

pub(crate) async fn load(
    ctx: &mut LoadContext<'_>,
    path: &Path,
    topic: &Topic,
    plan: &UnitPlan,
) -> Result<(), LoadError> {
    let structure: LessonsStructure = read_yaml(path)?;

    for (age_group_slug, entries) in &structure {
        let age_group = ctx
            .db
            .get_age_group(age_group_slug)
            .await
            .map_err(|e| unknown_reference(e, path, "age group", age_group_slug))?;

        for entry in entries {
            let slug = require(entry.slug.clone(), path, "slug")?;
            let number = require(entry.number, path, "number")?;

            let lesson = match ctx.db.get_lesson(plan.id, &slug).await {
                Ok(existing) => existing,
                Err(DatabaseError::NoResult) => {
                    insert_lesson(ctx, path, topic, plan, &slug, entry).await?
                }
                Err(error) => return Err(error.into()),
            };

            ctx.db
                .link_lesson_age_group(lesson.id, age_group.id, number)
                .await?;
            ctx.log.add(
                format!("Added Lesson: {} ({age_group_slug})", lesson.name),
                2,
            );
        }
    }
    Ok(())
}

/// Insert the lesson row and every slug-referenced link.
async fn insert_lesson(
    ctx: &mut LoadContext<'_>,
    path: &Path,
    topic: &Topic,
    plan: &UnitPlan,
    slug: &str,
    entry: &LessonStructure,
) -> Result<Lesson, LoadError> {
    let md_file = require(entry.md_file.clone(), path, "md-file")?;
    let doc = convert_file(&sibling(path, &md_file))?;
    let computational_thinking_links = match &entry.computational_thinking_md_file {
        Some(rel) => convert_file(&sibling(path, rel))?.html,
        None => String::new(),
    };

    let lesson = ctx
        .db
        .insert_lesson(&NewLesson {
            topic_id: topic.id,
            unit_plan_id: plan.id,
            slug: slug.to_string(),
            name: doc.title.clone(),
            duration: entry.duration,
            content: doc.html.clone(),
            computational_thinking_links,
            programming_challenges_description: entry
                .programming_challenges_description
                .clone()
                .unwrap_or_default(),
            heading_tree: Some(doc.heading_tree_value()),
        })
        .await?;

    for outcome_slug in &entry.learning_outcomes {
        let outcome = ctx
            .db
            .get_learning_outcome(outcome_slug)
            .await
            .map_err(|e| unknown_reference(e, path, "learning outcome", outcome_slug))?;
        ctx.db.link_lesson_outcome(lesson.id, outcome.id).await?;
    }

    for resource_slug in &entry.classroom_resources {
        let resource = ctx
            .db
            .get_classroom_resource(resource_slug)
            .await
            .map_err(|e| unknown_reference(e, path, "classroom resource", resource_slug))?;
        ctx.db
            .link_lesson_classroom_resource(lesson.id, resource.id)
            .await?;
    }

    for (resource_slug, description) in &entry.generated_resources {
        let resource = ctx
            .db
            .get_resource(resource_slug)
            .await
            .map_err(|e| unknown_reference(e, path, "resource", resource_slug))?;
        ctx.db
            .link_lesson_resource(lesson.id, resource.id, description)
            .await?;
    }

    for reference in &entry.programming_challenges {
        let challenge_slug = require(reference.slug.clone(), path, "slug")?;
        let set_number = require(reference.set_number, path, "set-number")?;
        let number = require(reference.number, path, "number")?;
        let challenge = ctx
            .db
            .get_challenge(topic.id, &challenge_slug)
            .await
            .map_err(|e| unknown_reference(e, path, "programming challenge", &challenge_slug))?;
        ctx.db
            .link_lesson_challenge(lesson.id, challenge.id, set_number, number)
            .await?;
    }

    Ok(lesson)
}
