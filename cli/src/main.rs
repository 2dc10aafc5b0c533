mod error;
mod http;
mod session_file;


use accounts::{RegistrationForm, Role, TokenStore};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::CliError;
use crate::http::ReqwestApi;
use crate::session_file::FileTokenStore;

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "Portal de Empleo account CLI")]
struct Cli {
    #[arg(long, env = "PORTAL_BASE_URL", default_value = accounts::api::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "PORTAL_SESSION_FILE", default_value = ".portal-session.json")]
    session_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API base URL answers.
    Ping,
    /// Log in and store the session tokens.
    Login {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, env = "PORTAL_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
    },
    /// Create a candidate or recruiter account.
    Register(RegisterArgs),
    /// Print the profile of the stored session.
    Whoami,
    /// Forget the stored session.
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    Candidate,
    Recruiter,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Candidate => Role::Candidate,
            RoleArg::Recruiter => Role::Recruiter,
        }
    }
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long, value_enum, default_value_t = RoleArg::Candidate)]
    role: RoleArg,
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, env = "PORTAL_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,
    /// Defaults to `--password`.
    #[arg(long)]
    confirm_password: Option<String>,
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    experience: String,
    #[arg(long, default_value = "")]
    education: String,
    #[arg(long, default_value = "")]
    skills: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    website: String,
}

impl RegisterArgs {
    fn into_form(self) -> RegistrationForm {
        let confirm_password = self.confirm_password.unwrap_or_else(|| self.password.clone());
        RegistrationForm {
            username: self.username,
            email: self.email,
            password: self.password,
            confirm_password,
            role: self.role.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            city: self.city,
            experience: self.experience,
            education: self.education,
            skills: self.skills,
            company: self.company,
            title: self.title,
            website: self.website,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let api = ReqwestApi::new(&cli.base_url)?;
    let store = FileTokenStore::new(cli.session_file);

    match cli.command {
        Command::Ping => run_ping(&api).await,
        Command::Login { username, password } => run_login(&api, &store, &username, &password).await,
        Command::Register(args) => run_register(&api, args).await,
        Command::Whoami => run_whoami(&api, &store).await,
        Command::Logout => {
            accounts::logout(&store);
            println!("logged out");
            Ok(())
        }
    }
}

async fn run_ping(api: &ReqwestApi) -> Result<(), CliError> {
    let status = api.ping().await?;
    println!("ok (HTTP {status})");
    Ok(())
}

async fn run_login(api: &ReqwestApi, store: &FileTokenStore, username: &str, password: &str) -> Result<(), CliError> {
    let outcome = accounts::submit_login(api, store, username, password).await?;
    match outcome.destination {
        Some(path) => println!("logged in as {} ({}); dashboard {path}", outcome.user.first_name, outcome.user.rol),
        None => println!("logged in as {} with unrouted role {:?}", outcome.user.first_name, outcome.user.rol),
    }
    Ok(())
}

async fn run_register(api: &ReqwestApi, args: RegisterArgs) -> Result<(), CliError> {
    let form = args.into_form();
    let role = form.role;
    accounts::submit_registration(api, &form).await?;
    tracing::info!(username = %form.username, role = role.as_wire(), "registered");
    println!("registered {} as {}", form.username, role.as_wire());
    Ok(())
}

async fn run_whoami(api: &ReqwestApi, store: &FileTokenStore) -> Result<(), CliError> {
    if store.access_token().is_none() {
        return Err(CliError::NotLoggedIn);
    }
    let user = accounts::restore_session(api, store).await.ok_or(CliError::SessionUnverified)?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}
