use crate::api::ProjectFilter;
use crate::sections::Category;
use clap::{Parser, Subcommand};

const LONG_ABOUT: &str = r#"
meistertask-cli - Manage MeisterTask projects and tasks from the terminal

Names do not need to be exact: a typed name is matched approximately
(case-insensitive, shared words, prefix patterns) against the remote
entities, and you are asked to pick one when several match.

Setup:
  export MEISTERTASK='authentication-key-here'

Examples:
  meistertask project create "Launch week" -d "Release preparation"
  meistertask project list --status archived
  meistertask task create "Write changelog" "Launch week"
  meistertask task move "changelog" "Launch week" "Done"
"#;

#[derive(Parser, Clone)]
#[command(name = "meistertask")]
#[command(about = "Manage MeisterTask projects and tasks from the terminal")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output (-q)
    #[arg(short, long)]
    pub quiet: bool,

    /// Report errors as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Manage projects
    #[command(subcommand, visible_alias = "p")]
    Project(ProjectCommands),

    /// Manage tasks of a specific project
    #[command(subcommand, visible_alias = "t")]
    Task(TaskCommands),
}

#[derive(Subcommand, Clone)]
pub enum ProjectCommands {
    /// Create a new project with the default Open / In Progress / Done sections
    #[command(visible_alias = "c")]
    Create {
        /// Project name (at least 5 characters)
        name: String,

        /// Project description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// View project details
    #[command(visible_aliases = ["v", "show"])]
    View {
        /// Project name
        name: String,
    },

    /// Update a project's name or description interactively
    #[command(visible_aliases = ["u", "edit"])]
    Update {
        /// Project name
        name: String,
    },

    /// Delete a project (asks for confirmation)
    #[command(visible_aliases = ["d", "rm"])]
    Delete {
        /// Project name
        name: String,
    },

    /// Archive a project (asks for confirmation)
    Archive {
        /// Project name
        name: String,
    },

    /// List projects by status
    #[command(visible_aliases = ["l", "ls"])]
    List {
        /// Which projects to list
        #[arg(long, value_enum, default_value_t = ProjectFilter::Active)]
        status: ProjectFilter,
    },
}

#[derive(Subcommand, Clone)]
pub enum TaskCommands {
    /// Create a new task in a project
    #[command(visible_alias = "c")]
    Create {
        /// Task name (at least 5 characters)
        name: String,

        /// Project name
        project: String,

        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List a project's tasks by section category
    #[command(visible_aliases = ["l", "ls"])]
    List {
        /// Project name
        project: String,

        /// Section category to list
        #[arg(short, long, value_enum, default_value_t = Category::All)]
        section: Category,
    },

    /// Update a task's name or description interactively
    #[command(visible_aliases = ["u", "edit"])]
    Update {
        /// Task name
        name: String,

        /// Project name
        project: String,
    },

    /// Move a task to another section (exact section name)
    #[command(visible_alias = "mv")]
    Move {
        /// Task name
        name: String,

        /// Project name
        project: String,

        /// Target section name
        section: String,
    },
}
