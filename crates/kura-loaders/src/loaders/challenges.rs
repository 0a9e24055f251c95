//! Programming challenge loader.
//!
//! Languages and difficulties are global records declared per topic file;
//! re-declarations across topics resolve to the existing row.

use std::path::Path;

use kura_content::markdown::convert_file;
use kura_content::structures::ChallengesStructure;
use kura_content::yaml::{read_yaml, require};
use kura_core::entities::{NewChallenge, NewChallengeImplementation, Topic};
use kura_db::error::DatabaseError;

use crate::context::{LoadContext, sibling};
use crate::error::{LoadError, unknown_reference};

pub(crate) async fn load(
    ctx: &mut LoadContext<'_>,
    path: &Path,
    topic: &Topic,
) -> Result<(), LoadError> {
    let structure: ChallengesStructure = read_yaml(path)?;

    for language in &structure.languages {
        let slug = require(language.slug.clone(), path, "slug")?;
        let name = require(language.name.clone(), path, "name")?;
        let number = require(language.number, path, "number")?;

        match ctx.db.get_challenge_language(&slug).await {
            Ok(_) => {}
            Err(DatabaseError::NoResult) => {
                ctx.db
                    .insert_challenge_language(&slug, &name, number, language.icon.as_deref())
                    .await?;
                ctx.log
                    .add(format!("Added Programming Language: {name}"), 1);
            }
            Err(error) => return Err(error.into()),
        }
    }

    for difficulty in &structure.difficulties {
        let level = require(difficulty.level, path, "level")?;
        let name = require(difficulty.name.clone(), path, "name")?;

        match ctx.db.get_challenge_difficulty(level).await {
            Ok(_) => {}
            Err(DatabaseError::NoResult) => {
                ctx.db.insert_challenge_difficulty(level, &name).await?;
                ctx.log
                    .add(format!("Added Challenge Difficulty: {name}"), 1);
            }
            Err(error) => return Err(error.into()),
        }
    }

    for challenge in &structure.challenges {
        let slug = require(challenge.slug.clone(), path, "slug")?;
        let md_file = require(challenge.md_file.clone(), path, "md-file")?;
        let set_number = require(challenge.set_number, path, "set-number")?;
        let number = require(challenge.number, path, "number")?;
        let level = require(challenge.difficulty, path, "difficulty")?;

        let difficulty = ctx
            .db
            .get_challenge_difficulty(level)
            .await
            .map_err(|e| unknown_reference(e, path, "challenge difficulty", &level.to_string()))?;

        let doc = convert_file(&sibling(path, &md_file))?;
        let extra_challenge = match &challenge.extra_challenge_md_file {
            Some(rel) => convert_file(&sibling(path, rel))?.html,
            None => String::new(),
        };

        let row = ctx
            .db
            .insert_challenge(&NewChallenge {
                topic_id: topic.id,
                slug,
                name: doc.title.clone(),
                set_number,
                number,
                content: doc.html.clone(),
                extra_challenge,
                difficulty_id: difficulty.id,
            })
            .await?;

        for outcome_slug in &challenge.learning_outcomes {
            let outcome = ctx
                .db
                .get_learning_outcome(outcome_slug)
                .await
                .map_err(|e| unknown_reference(e, path, "learning outcome", outcome_slug))?;
            ctx.db.link_challenge_outcome(row.id, outcome.id).await?;
        }

        for implementation in &challenge.implementations {
            let language_slug = require(implementation.language.clone(), path, "language")?;
            let language = ctx
                .db
                .get_challenge_language(&language_slug)
                .await
                .map_err(|e| unknown_reference(e, path, "programming language", &language_slug))?;

            let expected_result = match &implementation.expected_md_file {
                Some(rel) => convert_file(&sibling(path, rel))?.html,
                None => String::new(),
            };
            let hints = match &implementation.hints_md_file {
                Some(rel) => convert_file(&sibling(path, rel))?.html,
                None => String::new(),
            };
            let solution = match &implementation.solution_md_file {
                Some(rel) => convert_file(&sibling(path, rel))?.html,
                None => String::new(),
            };

            ctx.db
                .insert_challenge_implementation(&NewChallengeImplementation {
                    challenge_id: row.id,
                    language_id: language.id,
                    expected_result,
                    hints,
                    solution,
                })
                .await?;
        }

        ctx.log
            .add(format!("Added Programming Challenge: {}", row.name), 1);
    }
    Ok(())
}
