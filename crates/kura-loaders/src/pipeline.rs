//! The load pipeline: reads `structure.yml`, dispatches per-kind loaders,
//! and brackets every run in a single transaction.

use std::fmt;
use std::path::Path;

use kura_content::structures::RootStructure;
use kura_content::yaml::{read_yaml, require};

use crate::context::{LoadContext, sibling};
use crate::error::LoadError;
use crate::loaders;

/// What a `kura load` invocation loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Everything, in dependency order.
    All,
    CurriculumAreas,
    LearningOutcomes,
    AgeGroups,
    ClassroomResources,
    Glossary,
    Resources,
    Topics,
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::CurriculumAreas => "curriculum-areas",
            Self::LearningOutcomes => "learning-outcomes",
            Self::AgeGroups => "age-groups",
            Self::ClassroomResources => "classroom-resources",
            Self::Glossary => "glossary",
            Self::Resources => "resources",
            Self::Topics => "topics",
        };
        f.write_str(name)
    }
}

/// Run one load. On any error the transaction is rolled back and the
/// database is left exactly as it was.
///
/// # Errors
///
/// Returns the first [`LoadError`] hit; the load log covers everything
/// inserted before the failure (and then rolled back).
pub async fn run(ctx: &mut LoadContext<'_>, kind: LoadKind) -> Result<(), LoadError> {
    let path = ctx.structure_path();
    let root: RootStructure = read_yaml(&path)?;

    tracing::info!(%kind, "starting content load");
    ctx.db.begin().await?;
    match dispatch(ctx, &root, &path, kind).await {
        Ok(()) => {
            ctx.db.commit().await?;
            ctx.log.add("Content load complete", 0);
            Ok(())
        }
        Err(error) => {
            ctx.db.rollback().await?;
            tracing::error!(%kind, %error, "content load rolled back");
            Err(error)
        }
    }
}

async fn dispatch(
    ctx: &mut LoadContext<'_>,
    root: &RootStructure,
    path: &Path,
    kind: LoadKind,
) -> Result<(), LoadError> {
    match kind {
        LoadKind::All => {
            if let Some(rel) = &root.curriculum_areas {
                loaders::areas::load(ctx, &sibling(path, rel)).await?;
            }
            if let Some(rel) = &root.learning_outcomes {
                loaders::outcomes::load(ctx, &sibling(path, rel)).await?;
            }
            if let Some(rel) = &root.age_groups {
                loaders::age_groups::load(ctx, &sibling(path, rel)).await?;
            }
            if let Some(rel) = &root.classroom_resources {
                loaders::classroom_resources::load(ctx, &sibling(path, rel)).await?;
            }
            if let Some(rel) = &root.glossary {
                loaders::glossary::load(ctx, &sibling(path, rel)).await?;
            }
            if let Some(rel) = &root.resources {
                loaders::resources::load(ctx, &sibling(path, rel)).await?;
            }
            for rel in &root.topics {
                loaders::topics::load(ctx, &sibling(path, rel)).await?;
            }
            Ok(())
        }
        LoadKind::CurriculumAreas => {
            let rel = require(root.curriculum_areas.clone(), path, "curriculum-areas")?;
            loaders::areas::load(ctx, &sibling(path, &rel)).await
        }
        LoadKind::LearningOutcomes => {
            let rel = require(root.learning_outcomes.clone(), path, "learning-outcomes")?;
            loaders::outcomes::load(ctx, &sibling(path, &rel)).await
        }
        LoadKind::AgeGroups => {
            let rel = require(root.age_groups.clone(), path, "age-groups")?;
            loaders::age_groups::load(ctx, &sibling(path, &rel)).await
        }
        LoadKind::ClassroomResources => {
            let rel = require(root.classroom_resources.clone(), path, "classroom-resources")?;
            loaders::classroom_resources::load(ctx, &sibling(path, &rel)).await
        }
        LoadKind::Glossary => {
            let rel = require(root.glossary.clone(), path, "glossary")?;
            loaders::glossary::load(ctx, &sibling(path, &rel)).await
        }
        LoadKind::Resources => {
            let rel = require(root.resources.clone(), path, "resources")?;
            loaders::resources::load(ctx, &sibling(path, &rel)).await
        }
        LoadKind::Topics => {
            for rel in &root.topics {
                loaders::topics::load(ctx, &sibling(path, rel)).await?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use kura_content::error::ContentError;
    use kura_db::KuraDb;

    use super::{LoadKind, run};
    use crate::context::LoadContext;
    use crate::error::LoadError;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Lay out a small but complete content tree.
    fn write_content_tree(dir: &Path) {
        write(
            dir,
            "content/structure.yml",
            "\
curriculum-areas: curriculum-areas.yml
learning-outcomes: learning-outcomes.yml
age-groups: age-groups.yml
classroom-resources: classroom-resources.yml
glossary: glossary
resources: resources.yml
topics:
  - topics/binary-numbers/binary-numbers.yml
",
        );
        write(
            dir,
            "content/curriculum-areas.yml",
            "\
computational-thinking:
  name: Computational thinking
  number: 1
  colour: \"#3f51b5\"
  children:
    algorithms:
      name: Algorithms
",
        );
        write(
            dir,
            "content/learning-outcomes.yml",
            "\
binary-count-16:
  text: Count up to 16 in binary
  curriculum-areas:
    - computational-thinking
",
        );
        write(
            dir,
            "content/age-groups.yml",
            "\
ages-5-7:
  min-age: 5
  max-age: 7
  description: Junior primary
",
        );
        write(dir, "content/classroom-resources.yml", "scissors: Scissors\n");
        write(dir, "content/glossary/bit.md", "# Bit\n\nA binary digit.\n");
        write(
            dir,
            "content/resources.yml",
            "\
pixel-painter:
  name: Pixel Painter
  generator: pixel-painter
  thumbnail: img/resources/pixel-painter/thumbnail.png
  copies: true
",
        );
        write(dir, "static/img/resources/pixel-painter/thumbnail.png", "png");

        write(
            dir,
            "content/topics/binary-numbers/binary-numbers.yml",
            "\
slug: binary-numbers
md-file: binary-numbers.md
other-resources-md-file: other-resources.md
icon: img/topics/binary-numbers.png
programming-challenges: programming-challenges/programming-challenges.yml
unit-plans:
  - unit-plans/unit-plan/unit-plan.yml
curriculum-integrations: curriculum-integrations.yml
",
        );
        write(
            dir,
            "content/topics/binary-numbers/binary-numbers.md",
            "# Binary numbers\n\nBits and bytes.\n",
        );
        write(
            dir,
            "content/topics/binary-numbers/other-resources.md",
            "# Other resources\n\nSee also.\n",
        );

        write(
            dir,
            "content/topics/binary-numbers/programming-challenges/programming-challenges.yml",
            "\
languages:
  - slug: python
    name: Python
    number: 1
difficulties:
  - level: 1
    name: Beginner
challenges:
  - slug: count-to-16
    md-file: count-to-16.md
    set-number: 1
    number: 1
    difficulty: 1
    learning-outcomes:
      - binary-count-16
    implementations:
      - language: python
        expected-md-file: count-to-16-expected.md
        solution-md-file: count-to-16-solution.md
",
        );
        write(
            dir,
            "content/topics/binary-numbers/programming-challenges/count-to-16.md",
            "# Count to 16\n\nPrint the powers of two.\n",
        );
        write(
            dir,
            "content/topics/binary-numbers/programming-challenges/count-to-16-expected.md",
            "# Expected output\n\n1 2 4 8 16\n",
        );
        write(
            dir,
            "content/topics/binary-numbers/programming-challenges/count-to-16-solution.md",
            "# Solution\n\n```python\nprint(16)\n```\n",
        );

        write(
            dir,
            "content/topics/binary-numbers/unit-plans/unit-plan/unit-plan.yml",
            "\
slug: unit-plan
md-file: unit-plan.md
lessons: lessons.yml
",
        );
        write(
            dir,
            "content/topics/binary-numbers/unit-plans/unit-plan/unit-plan.md",
            "# Unit plan\n\n## Sequence\n\nLessons in order.\n",
        );
        write(
            dir,
            "content/topics/binary-numbers/unit-plans/unit-plan/lessons.yml",
            "\
ages-5-7:
  - slug: what-are-bits
    md-file: lessons/what-are-bits.md
    number: 1
    duration: 45
    learning-outcomes:
      - binary-count-16
    classroom-resources:
      - scissors
    generated-resources:
      pixel-painter: One copy per student
    programming-challenges:
      - slug: count-to-16
        set-number: 1
        number: 1
",
        );
        write(
            dir,
            "content/topics/binary-numbers/unit-plans/unit-plan/lessons/what-are-bits.md",
            "# What are bits?\n\nA lesson about bits.\n",
        );

        write(
            dir,
            "content/topics/binary-numbers/curriculum-integrations.yml",
            "\
- slug: binary-bracelets
  md-file: binary-bracelets.md
  number: 1
  curriculum-areas:
    - algorithms
  prerequisite-lessons:
    - unit-plan/what-are-bits
",
        );
        write(
            dir,
            "content/topics/binary-numbers/binary-bracelets.md",
            "# Binary bracelets\n\nMake a bracelet.\n",
        );
    }

    async fn load_all(dir: &Path) -> (KuraDb, Result<(), LoadError>, String) {
        let db = KuraDb::open_local(":memory:").await.unwrap();
        let mut ctx = LoadContext::new(&db, dir.join("content"), dir.join("static"));
        let result = run(&mut ctx, LoadKind::All).await;
        let log = ctx.log.render();
        (db, result, log)
    }

    #[tokio::test]
    async fn full_tree_loads() {
        let dir = tempfile::tempdir().unwrap();
        write_content_tree(dir.path());

        let (db, result, log) = load_all(dir.path()).await;
        result.unwrap();

        let topic = db.get_topic("binary-numbers").await.unwrap();
        assert_eq!(topic.name, "Binary numbers");
        assert!(topic.content.contains("<h1>Binary numbers</h1>"));
        assert!(topic.other_resources.contains("See also"));
        assert_eq!(topic.icon.as_deref(), Some("img/topics/binary-numbers.png"));

        let plan = db.get_unit_plan(topic.id, "unit-plan").await.unwrap();
        assert_eq!(plan.name, "Unit plan");
        assert!(plan.heading_tree.is_some());

        let lesson = db.get_lesson(plan.id, "what-are-bits").await.unwrap();
        assert_eq!(lesson.name, "What are bits?");
        assert_eq!(lesson.duration, Some(45));

        let groups = db.lesson_age_groups(lesson.id).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0.slug, "ages-5-7");
        assert_eq!(groups[0].1, 1);

        let outcomes = db.lesson_learning_outcomes(lesson.id).await.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].slug, "binary-count-16");

        let generated = db.lesson_generated_resources(lesson.id).await.unwrap();
        assert_eq!(generated.len(), 1);
        assert_eq!(generated[0].1, "One copy per student");

        let challenge = db.get_challenge(topic.id, "count-to-16").await.unwrap();
        assert_eq!(challenge.name, "Count to 16");
        let implementations = db.challenge_implementations(challenge.id).await.unwrap();
        assert_eq!(implementations.len(), 1);
        assert!(implementations[0].solution.contains("<code"));

        let attached = db.lesson_challenges(lesson.id).await.unwrap();
        assert_eq!(attached.len(), 1);
        assert_eq!(attached[0].0.slug, "count-to-16");

        let term = db.get_glossary_term("bit").await.unwrap();
        assert_eq!(term.term, "Bit");

        let resource = db.get_resource("pixel-painter").await.unwrap();
        assert!(resource.copies);

        let integrations = db.list_curriculum_integrations(topic.id).await.unwrap();
        assert_eq!(integrations.len(), 1);
        assert_eq!(integrations[0].slug, "binary-bracelets");

        assert!(log.contains("Added Topic: Binary numbers"));
        assert!(log.contains("    Added Lesson: What are bits? (ages-5-7)"));
        assert!(log.contains("Content load complete"));
    }

    #[tokio::test]
    async fn unknown_outcome_reference_rolls_back_everything() {
        let dir = tempfile::tempdir().unwrap();
        write_content_tree(dir.path());
        // Reference an outcome that is never declared.
        write(
            dir.path(),
            "content/topics/binary-numbers/unit-plans/unit-plan/lessons.yml",
            "\
ages-5-7:
  - slug: what-are-bits
    md-file: lessons/what-are-bits.md
    number: 1
    learning-outcomes:
      - not-a-real-outcome
",
        );

        let (db, result, _log) = load_all(dir.path()).await;
        match result {
            Err(LoadError::UnknownReference { kind, slug, .. }) => {
                assert_eq!(kind, "learning outcome");
                assert_eq!(slug, "not-a-real-outcome");
            }
            other => panic!("expected UnknownReference, got {other:?}"),
        }

        // Nothing from the failed run may remain.
        assert!(db.list_topics().await.unwrap().is_empty());
        assert!(db.list_age_groups().await.unwrap().is_empty());
        assert!(db.list_resources().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_markdown_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        write_content_tree(dir.path());
        std::fs::remove_file(
            dir.path()
                .join("content/topics/binary-numbers/binary-numbers.md"),
        )
        .unwrap();

        let (_db, result, _log) = load_all(dir.path()).await;
        match result {
            Err(LoadError::Content(ContentError::MissingFile { path })) => {
                assert!(path.ends_with("binary-numbers.md"));
            }
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unregistered_generator_is_invalid_value() {
        let dir = tempfile::tempdir().unwrap();
        write_content_tree(dir.path());
        write(
            dir.path(),
            "content/resources.yml",
            "\
word-search:
  name: Word Search
  generator: word-search
  thumbnail: img/resources/pixel-painter/thumbnail.png
  copies: false
",
        );

        let (_db, result, _log) = load_all(dir.path()).await;
        match result {
            Err(LoadError::Content(ContentError::InvalidValue { field, .. })) => {
                assert_eq!(field, "generator");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_required_field_names_file_and_field() {
        let dir = tempfile::tempdir().unwrap();
        write_content_tree(dir.path());
        write(
            dir.path(),
            "content/topics/binary-numbers/binary-numbers.yml",
            "slug: binary-numbers\n",
        );

        let (_db, result, _log) = load_all(dir.path()).await;
        match result {
            Err(LoadError::Content(ContentError::MissingRequiredField { field, path })) => {
                assert_eq!(field, "md-file");
                assert!(path.ends_with("binary-numbers.yml"));
            }
            other => panic!("expected MissingRequiredField, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn partial_load_requires_its_structure_entry() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "content/structure.yml", "topics: []\n");

        let db = KuraDb::open_local(":memory:").await.unwrap();
        let mut ctx = LoadContext::new(&db, dir.path().join("content"), dir.path().join("static"));
        let result = run(&mut ctx, LoadKind::Glossary).await;
        assert!(matches!(
            result,
            Err(LoadError::Content(ContentError::MissingRequiredField {
                field: "glossary",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn partial_loads_compose_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        write_content_tree(dir.path());

        let db = KuraDb::open_local(":memory:").await.unwrap();
        for kind in [
            LoadKind::CurriculumAreas,
            LoadKind::LearningOutcomes,
            LoadKind::AgeGroups,
            LoadKind::ClassroomResources,
            LoadKind::Resources,
            LoadKind::Topics,
        ] {
            let mut ctx =
                LoadContext::new(&db, dir.path().join("content"), dir.path().join("static"));
            run(&mut ctx, kind).await.unwrap();
        }

        let topic = db.get_topic("binary-numbers").await.unwrap();
        assert_eq!(topic.name, "Binary numbers");
    }
}
