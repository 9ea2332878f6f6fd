use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use project_settings::{
    domain::{ProjectId, ProjectRoles, Role, RoleInfo, UserId},
    get_rest_app_state,
    settings::{DeleteOutcome, ProjectSettings, RoleAction, SubmitOutcome},
    utils::{
        constants::{prod, PROJECTS_API_BASE_URL, PROJECTS_API_TOKEN},
        tracing::init_tracing,
    },
};

#[derive(Parser)]
#[command(about = "Edit or delete a project through the projects REST API")]
struct Cli {
    /// Project to operate on
    #[arg(long)]
    project: String,

    /// Roles in display order; suffix a role with `!unlicensed` when the
    /// current plan does not license it
    #[arg(long = "role", value_delimiter = ',', default_values_t = default_roles())]
    roles: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply edits and submit them as a single update
    Edit {
        #[arg(long)]
        name: Option<String>,
        /// User ID to add as a member
        #[arg(long = "add")]
        add: Vec<String>,
        /// `user=role` assignment, or `user=remove`
        #[arg(long = "set")]
        set: Vec<String>,
    },
    /// Delete the project, optionally moving its resources elsewhere
    Delete {
        #[arg(long)]
        transfer_to: Option<String>,
    },
}

fn default_roles() -> Vec<String> {
    ["project:admin", "project:editor", "project:viewer"]
        .map(String::from)
        .to_vec()
}

fn parse_roles(roles: &[String]) -> ProjectRoles {
    ProjectRoles::new(
        roles
            .iter()
            .map(|entry| match entry.strip_suffix("!unlicensed") {
                Some(role) => RoleInfo::new(Role::new(role), false),
                None => RoleInfo::new(Role::new(entry.as_str()), true),
            })
            .collect(),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let cli = Cli::parse();
    let app_state = get_rest_app_state(
        &PROJECTS_API_BASE_URL,
        PROJECTS_API_TOKEN.clone(),
        prod::rest_client::TIMEOUT,
    )?;
    let project_id = ProjectId::parse(&cli.project)?;
    let mut settings = ProjectSettings::load(
        app_state,
        parse_roles(&cli.roles),
        &project_id,
    )
    .await?;

    match cli.command {
        Command::Edit { name, add, set } => {
            if let Some(name) = name {
                settings.set_name(name);
            }
            if !add.is_empty() {
                let candidates = settings.candidate_users().await?;
                for user_id in add {
                    let user_id = UserId::parse(&user_id)?;
                    match candidates.iter().find(|user| user.id == user_id) {
                        Some(user) => {
                            settings.add_member(user.clone());
                        }
                        None => tracing::warn!(
                            %user_id,
                            "User is unknown or already a member"
                        ),
                    }
                }
            }
            for assignment in set {
                let (user_id, action) = assignment.split_once('=').ok_or(
                    eyre!("Expected `user=role`, got `{assignment}`"),
                )?;
                let action: RoleAction = action.parse()?;
                settings.apply_role_action(&UserId::parse(user_id)?, action);
            }

            match settings.submit().await {
                SubmitOutcome::Saved(_) | SubmitOutcome::Skipped => Ok(()),
                SubmitOutcome::Invalid(e) => Err(e.into()),
                SubmitOutcome::Failed => Err(eyre!("Failed to save project")),
            }
        }
        Command::Delete { transfer_to } => {
            let transfer_to =
                transfer_to.as_deref().map(ProjectId::parse).transpose()?;
            if !settings.request_delete().await {
                return Err(eyre!("Failed to load transfer targets"));
            }
            match settings.confirm_delete(transfer_to).await {
                DeleteOutcome::Deleted => Ok(()),
                DeleteOutcome::Invalid(e) => Err(e.into()),
                DeleteOutcome::Failed => Err(eyre!("Failed to delete project")),
            }
        }
    }
}
