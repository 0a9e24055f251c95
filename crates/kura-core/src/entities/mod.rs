//! Entity structs for the curriculum domain.
//!
//! Each entity mirrors one table in `kura-db`. The `New*` structs are insert
//! payloads: everything but the database-assigned rowid.

mod age_group;
mod challenge;
mod classroom_resource;
mod curriculum_area;
mod glossary_term;
mod integration;
mod learning_outcome;
mod lesson;
mod resource;
mod topic;
mod unit_plan;

pub use age_group::AgeGroup;
pub use challenge::{
    ChallengeDifficulty, ChallengeImplementation, ChallengeLanguage, NewChallenge,
    NewChallengeImplementation, ProgrammingChallenge,
};
pub use classroom_resource::ClassroomResource;
pub use curriculum_area::CurriculumArea;
pub use glossary_term::GlossaryTerm;
pub use integration::{CurriculumIntegration, NewCurriculumIntegration};
pub use learning_outcome::LearningOutcome;
pub use lesson::{Lesson, NewLesson};
pub use resource::Resource;
pub use topic::{NewTopic, Topic};
pub use unit_plan::{NewUnitPlan, UnitPlan};
