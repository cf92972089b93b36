use clap::Parser;
use meistertask_cli::api::HttpApi;
use meistertask_cli::cli::{Cli, Commands, ProjectCommands, TaskCommands};
use meistertask_cli::config::Config;
use meistertask_cli::display::Theme;
use meistertask_cli::error::Result;
use meistertask_cli::logging::LoggingConfig;
use meistertask_cli::prompt::TermPrompter;
use meistertask_cli::workflows::Meistertask;
use std::io::IsTerminal;

fn main() {
    let cli = Cli::parse();

    let log_config = LoggingConfig::from_args(cli.quiet, cli.verbose > 0, cli.json);
    if let Err(e) = meistertask_cli::logging::init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        if cli.json {
            let error_response = e.to_error_response();
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&error_response)
                    .unwrap_or_else(|_| e.to_string())
            );
        } else {
            let theme = theme_for(&cli);
            eprintln!("{}", theme.error.apply_to(format!("[-] {}", e)));
        }
        std::process::exit(1);
    }
}

fn theme_for(cli: &Cli) -> Theme {
    if cli.no_color || cli.json || !std::io::stdout().is_terminal() {
        Theme::plain()
    } else {
        Theme::colored()
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;
    let api = HttpApi::new(&config)?;
    let mut app = Meistertask::new(api, TermPrompter::new(), theme_for(cli));

    match cli.command.clone() {
        Commands::Project(project_cmd) => match project_cmd {
            ProjectCommands::Create { name, description } => {
                app.project_create(&name, &description)
            },
            ProjectCommands::View { name } => app.project_view(&name),
            ProjectCommands::Update { name } => app.project_update(&name),
            ProjectCommands::Delete { name } => app.project_delete(&name),
            ProjectCommands::Archive { name } => app.project_archive(&name),
            ProjectCommands::List { status } => app.project_list(status),
        },

        Commands::Task(task_cmd) => match task_cmd {
            TaskCommands::Create {
                name,
                project,
                description,
            } => app.task_create(&name, &project, &description),
            TaskCommands::List { project, section } => app.task_list(&project, section),
            TaskCommands::Update { name, project } => app.task_update(&name, &project),
            TaskCommands::Move {
                name,
                project,
                section,
            } => app.task_move(&name, &project, &section),
        },
    }
}
