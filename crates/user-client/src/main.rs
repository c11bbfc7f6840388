//! User Client - command line access to the users API.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppError, AppResult};
use domain::{
    format_birth_date, parse_birth_date, AgeCalculator, FixedClock, SystemClock, User,
    BIRTH_DATE_FORMAT,
};
use user_client_lib::{UserClient, UserClientConfig};

#[derive(Parser)]
#[command(name = "user-client")]
#[command(about = "Client for the users REST API")]
struct Cli {
    /// Users collection URL (overrides USER_API_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a user to the remote collection
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        postal_code: String,
        /// Birth date (YYYY-MM-DD, MM/DD/YYYY or RFC 3339)
        #[arg(long)]
        birth_date: String,
    },
    /// List users from the remote collection
    List {
        /// Include each user's current age
        #[arg(long)]
        with_age: bool,
    },
    /// Compute the age for a birth date
    Age {
        birth_date: String,
        /// Compute as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error [{}]: {}", e.code(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = UserClientConfig::from_env();
    if let Some(url) = cli.url {
        config = config.with_endpoint(url);
    }

    match cli.command {
        Commands::Add {
            first_name,
            last_name,
            email,
            city,
            postal_code,
            birth_date,
        } => {
            // Reject bad dates before touching the network
            let birth_date = parse_birth_date(&birth_date)?;
            let user = User::new(first_name, last_name, email, city, postal_code, birth_date);

            let client = UserClient::from_config(&config.http)?;
            client.add_user(&user).await?;
            info!("Added user {} at {}", user.email, client.url());
        }
        Commands::List { with_age } => {
            let client = UserClient::from_config(&config.http)?;
            let users = client.get_users().await?;

            for user in &users {
                let age = if with_age {
                    Some(client.calculate_age(user.birth_date)?)
                } else {
                    None
                };
                println!("{}", describe(user, age));
            }
        }
        Commands::Age { birth_date, today } => {
            let age = match today {
                Some(today) => {
                    let today = NaiveDate::parse_from_str(&today, BIRTH_DATE_FORMAT)
                        .map_err(|e| AppError::validation(format!("invalid --today: {}", e)))?;
                    AgeCalculator::new(FixedClock(today)).age_from_input(Some(&birth_date))?
                }
                None => AgeCalculator::new(SystemClock).age_from_input(Some(&birth_date))?,
            };
            println!("{}", age);
        }
    }

    Ok(())
}

/// One-line summary of a user.
fn describe(user: &User, age: Option<u32>) -> String {
    let mut line = format!(
        "{} <{}>, {} {}, born {}",
        user.full_name(),
        user.email,
        user.postal_code,
        user.city,
        format_birth_date(user.birth_date)
    );
    if let Some(age) = age {
        line.push_str(&format!(", age {}", age));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> User {
        User::new(
            "Jane",
            "Roe",
            "jane@example.com",
            "Lyon",
            "69001",
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        )
    }

    #[test]
    fn test_describe_without_age() {
        assert_eq!(
            describe(&jane(), None),
            "Jane Roe <jane@example.com>, 69001 Lyon, born 1990-05-17"
        );
    }

    #[test]
    fn test_describe_with_age() {
        assert!(describe(&jane(), Some(34)).ends_with("born 1990-05-17, age 34"));
    }

    #[test]
    fn test_cli_parses_add() {
        let cli = Cli::try_parse_from([
            "user-client",
            "--url",
            "http://example.test/users",
            "add",
            "--first-name",
            "Jane",
            "--last-name",
            "Roe",
            "--email",
            "jane@example.com",
            "--city",
            "Lyon",
            "--postal-code",
            "69001",
            "--birth-date",
            "1990-05-17",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("http://example.test/users"));
        assert!(matches!(cli.command, Commands::Add { ref email, .. } if email == "jane@example.com"));
    }

    #[tokio::test]
    async fn test_age_command_with_pinned_today() {
        let cli = Cli::try_parse_from(["user-client", "age", "1999-01-04", "--today", "2024-06-01"])
            .unwrap();
        assert!(run(cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_add_rejects_bad_birth_date_before_io() {
        let cli = Cli::try_parse_from([
            "user-client",
            "--url",
            "http://127.0.0.1:1/users",
            "add",
            "--first-name",
            "Jane",
            "--last-name",
            "Roe",
            "--email",
            "jane@example.com",
            "--city",
            "Lyon",
            "--postal-code",
            "69001",
            "--birth-date",
            "not a date",
        ])
        .unwrap();

        let err = run(cli).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
