use clap::{Args, Subcommand};

/// Top-level subcommands for the `kura` binary.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the .kura directory and a default config
    Init(InitArgs),

    /// Load content from the content directory into the database
    Load {
        #[command(subcommand)]
        kind: LoadCommands,
    },

    /// Inspect loaded topics
    Topic {
        #[command(subcommand)]
        action: TopicCommands,
    },

    /// List resource records and generate printable pages
    Resource {
        #[command(subcommand)]
        action: ResourceCommands,
    },
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<String>,
}

/// What to load; `all` runs everything in dependency order.
#[derive(Debug, Subcommand)]
pub enum LoadCommands {
    All,
    CurriculumAreas,
    LearningOutcomes,
    AgeGroups,
    ClassroomResources,
    Glossary,
    Resources,
    Topics,
}

#[derive(Debug, Subcommand)]
pub enum TopicCommands {
    /// List all loaded topics
    List,
    /// Show one topic by slug
    Get { slug: String },
}

#[derive(Debug, Subcommand)]
pub enum ResourceCommands {
    /// List resource records
    List,
    /// Generate a resource's pages and thumbnail
    Generate {
        /// Resource slug (as loaded from resources.yml)
        slug: String,

        /// Generator options as key=value (e.g. -o method=greyscale)
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,

        /// Output directory (defaults to the configured resources.output_dir)
        #[arg(long)]
        out_dir: Option<String>,
    },
}
