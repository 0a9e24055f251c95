//! Serde shapes for the YAML structure files.
//!
//! Fields the loaders insist on are `Option` here and unwrapped through
//! [`crate::yaml::require`], so a missing key surfaces as the typed
//! missing-required-field error (with the file path) rather than a serde
//! message. Collections default to empty. All keys are kebab-case.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Root `structure.yml`: names the per-kind structure files, each path
/// relative to the content root. Absent kinds are skipped by `load all`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RootStructure {
    pub curriculum_areas: Option<String>,
    pub learning_outcomes: Option<String>,
    pub age_groups: Option<String>,
    pub classroom_resources: Option<String>,
    /// Directory of per-term markdown files.
    pub glossary: Option<String>,
    pub resources: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Per-topic structure file. Paths are relative to the file's directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TopicStructure {
    pub slug: Option<String>,
    pub md_file: Option<String>,
    pub other_resources_md_file: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub unit_plans: Vec<String>,
    pub programming_challenges: Option<String>,
    pub curriculum_integrations: Option<String>,
}

/// Per-unit-plan structure file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UnitPlanStructure {
    pub slug: Option<String>,
    pub md_file: Option<String>,
    pub computational_thinking_md_file: Option<String>,
    /// Lessons structure file, keyed by age-group slug.
    pub lessons: Option<String>,
}

/// Lessons structure file: age-group slug → ordered lesson entries.
pub type LessonsStructure = BTreeMap<String, Vec<LessonStructure>>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LessonStructure {
    pub slug: Option<String>,
    pub md_file: Option<String>,
    /// Lesson number within the age group.
    pub number: Option<i64>,
    /// Duration in minutes.
    pub duration: Option<i64>,
    pub computational_thinking_md_file: Option<String>,
    pub programming_challenges_description: Option<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub classroom_resources: Vec<String>,
    /// Generated resource slug → usage description.
    #[serde(default)]
    pub generated_resources: BTreeMap<String, String>,
    #[serde(default)]
    pub programming_challenges: Vec<LessonChallengeRef>,
}

/// A lesson's reference to a topic challenge, with lesson-local numbering.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LessonChallengeRef {
    pub slug: Option<String>,
    pub set_number: Option<i64>,
    pub number: Option<i64>,
}

/// Per-topic programming challenges structure file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChallengesStructure {
    #[serde(default)]
    pub languages: Vec<LanguageStructure>,
    #[serde(default)]
    pub difficulties: Vec<DifficultyStructure>,
    #[serde(default)]
    pub challenges: Vec<ChallengeStructure>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LanguageStructure {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub number: Option<i64>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DifficultyStructure {
    pub level: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChallengeStructure {
    pub slug: Option<String>,
    pub md_file: Option<String>,
    pub extra_challenge_md_file: Option<String>,
    pub set_number: Option<i64>,
    pub number: Option<i64>,
    /// Difficulty level, matching a declared difficulty.
    pub difficulty: Option<i64>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub implementations: Vec<ImplementationStructure>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImplementationStructure {
    /// Language slug, matching a declared language.
    pub language: Option<String>,
    pub expected_md_file: Option<String>,
    pub hints_md_file: Option<String>,
    pub solution_md_file: Option<String>,
}

/// `age-groups.yml`: slug → bracket.
pub type AgeGroupsStructure = BTreeMap<String, AgeGroupStructure>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AgeGroupStructure {
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    #[serde(default)]
    pub description: String,
}

/// `learning-outcomes.yml`: slug → outcome.
pub type LearningOutcomesStructure = BTreeMap<String, LearningOutcomeStructure>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LearningOutcomeStructure {
    pub text: Option<String>,
    #[serde(default)]
    pub curriculum_areas: Vec<String>,
}

/// `curriculum-areas.yml`: slug → area (one level of children).
pub type CurriculumAreasStructure = BTreeMap<String, CurriculumAreaStructure>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CurriculumAreaStructure {
    pub name: Option<String>,
    pub number: Option<i64>,
    #[serde(default)]
    pub colour: String,
    /// Child areas inherit the parent's colour.
    #[serde(default)]
    pub children: BTreeMap<String, CurriculumAreaChild>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CurriculumAreaChild {
    pub name: Option<String>,
    pub number: Option<i64>,
}

/// `classroom-resources.yml`: slug → description.
pub type ClassroomResourcesStructure = BTreeMap<String, String>;

/// Per-topic `curriculum-integrations.yml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IntegrationStructure {
    pub slug: Option<String>,
    pub md_file: Option<String>,
    pub number: Option<i64>,
    #[serde(default)]
    pub curriculum_areas: Vec<String>,
    /// `unit-plan-slug/lesson-slug` references within the topic.
    #[serde(default)]
    pub prerequisite_lessons: Vec<String>,
}

/// `resources.yml`: slug → printable resource definition.
pub type ResourcesStructure = BTreeMap<String, ResourceStructure>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResourceStructure {
    pub name: Option<String>,
    /// Generator slug, validated against the generator registry.
    pub generator: Option<String>,
    /// Thumbnail path relative to the static directory.
    pub thumbnail: Option<String>,
    pub copies: Option<bool>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn topic_structure_parses_kebab_case() {
        let yaml = "\
slug: binary-numbers
md-file: binary-numbers.md
other-resources-md-file: other-resources.md
unit-plans:
  - unit-plans/unit-plan/unit-plan.yml
programming-challenges: programming-challenges/programming-challenges.yml
";
        let topic: TopicStructure = serde_yaml::from_str(yaml).expect("should parse");
        assert_eq!(topic.slug.as_deref(), Some("binary-numbers"));
        assert_eq!(topic.md_file.as_deref(), Some("binary-numbers.md"));
        assert_eq!(topic.unit_plans.len(), 1);
        assert!(topic.curriculum_integrations.is_none());
    }

    #[test]
    fn lessons_structure_keys_by_age_group() {
        let yaml = "\
ages-5-7:
  - slug: what-are-bits
    md-file: lessons/what-are-bits.md
    number: 1
    learning-outcomes:
      - binary-count-16
    generated-resources:
      pixel-painter: One copy per pair of students
ages-8-10:
  - slug: how-binary-digits-work
    md-file: lessons/how-binary-digits-work.md
    number: 1
    duration: 45
";
        let lessons: LessonsStructure = serde_yaml::from_str(yaml).expect("should parse");
        assert_eq!(lessons.len(), 2);

        let junior = &lessons["ages-5-7"][0];
        assert_eq!(junior.number, Some(1));
        assert_eq!(junior.duration, None);
        assert_eq!(junior.learning_outcomes, vec!["binary-count-16"]);
        assert_eq!(
            junior.generated_resources["pixel-painter"],
            "One copy per pair of students"
        );
    }

    #[test]
    fn challenges_structure_parses() {
        let yaml = "\
languages:
  - slug: python
    name: Python
    number: 1
difficulties:
  - level: 1
    name: Beginner
challenges:
  - slug: count-to-16
    md-file: count-to-16/count-to-16.md
    set-number: 1
    number: 1
    difficulty: 1
    implementations:
      - language: python
        solution-md-file: count-to-16/python-solution.md
";
        let structure: ChallengesStructure = serde_yaml::from_str(yaml).expect("should parse");
        assert_eq!(structure.languages.len(), 1);
        assert_eq!(structure.difficulties.len(), 1);
        assert_eq!(structure.challenges[0].implementations.len(), 1);
        assert_eq!(
            structure.challenges[0].implementations[0]
                .language
                .as_deref(),
            Some("python")
        );
    }

    #[test]
    fn resource_structure_requires_nothing_at_parse_time() {
        let resources: ResourcesStructure =
            serde_yaml::from_str("pixel-painter:\n  name: Pixel Painter\n").expect("should parse");
        let resource = &resources["pixel-painter"];
        assert_eq!(resource.name.as_deref(), Some("Pixel Painter"));
        assert!(resource.generator.is_none());
        assert!(resource.copies.is_none());
    }

    #[test]
    fn root_structure_defaults_to_empty() {
        let root: RootStructure = serde_yaml::from_str("{}").expect("should parse");
        assert!(root.topics.is_empty());
        assert!(root.glossary.is_none());
    }
}
