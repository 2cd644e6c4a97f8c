// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG=debug shows every request state change)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Print the result
// 5. Exit with proper code (0 = success, 1 = fetch failed, 2 = usage/internal error)
//
// The runtime is single-threaded: concurrent requests are interleaved by
// tokio on one thread, never run in parallel.
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;

use fetch_json::fetcher::{self, FetchConfig, FetchError, FetchRequest};
use fetch_json::github::{GithubClient, GithubRepo};
use fetch_json::placeholder::PlaceholderClient;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get { url, status, headers } => handle_get(&url, status, &headers).await,
        Commands::User { id } => handle_user(id).await,
        Commands::Github { username, repos, json } => handle_github(&username, repos, json).await,
        Commands::GithubMany { usernames } => handle_github_many(&usernames).await,
    }
}

// Handles the 'get' subcommand
async fn handle_get(url: &str, status: bool, headers: &[String]) -> Result<()> {
    let mut config = FetchConfig::new();
    for raw in headers {
        config = config.with_raw_header(raw)?;
    }

    let request = FetchRequest::new(url)?.with_config(&config);

    if status {
        print_json(&fetcher::fetch_with_status(&request).await?)
    } else {
        print_json(&fetcher::fetch_json(&request).await?)
    }
}

// Handles the 'user' subcommand
async fn handle_user(id: u32) -> Result<()> {
    let client = PlaceholderClient::new()?;
    print_json(&client.get_user(id).await?)
}

// Handles the 'github' subcommand
async fn handle_github(username: &str, repos: bool, json: bool) -> Result<()> {
    let client = GithubClient::new()?;

    if !repos {
        let user = client.get_user(username).await?;
        return print_json(&user);
    }

    let (user, repos) = client.get_user_repos(username).await?;
    if json {
        print_json(&repos)
    } else {
        println!("📦 Repositories of {}\n", user.login);
        print_repo_table(&repos);
        Ok(())
    }
}

// Handles the 'github-many' subcommand
async fn handle_github_many(usernames: &[String]) -> Result<()> {
    let client = GithubClient::new()?;
    let users = client.get_users(usernames).await?;
    print_json(&users)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value)?;
    println!("{}", output);
    Ok(())
}

// Prints repositories as a human-readable table in the terminal
fn print_repo_table(repos: &[GithubRepo]) {
    println!("{:<40} {:<8} {:<15} {:<40}", "REPOSITORY", "STARS", "LANGUAGE", "DESCRIPTION");
    println!("{}", "=".repeat(105));

    for repo in repos {
        let description = repo.description.as_deref().unwrap_or("");
        let description = if description.chars().count() > 37 {
            format!("{}...", description.chars().take(37).collect::<String>())
        } else {
            description.to_string()
        };

        println!(
            "{:<40} {:<8} {:<15} {:<40}",
            repo.full_name,
            repo.stargazers_count,
            repo.language.as_deref().unwrap_or("-"),
            description
        );
    }

    println!();
    println!("📊 Total: {}", repos.len());
}

// Maps an error to the process exit code
//
// A request that went out and failed is exit code 1, anything else
// (bad URL, bad header, output failure) is 2.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.chain().find_map(|cause| cause.downcast_ref::<FetchError>()) {
        Some(FetchError::InvalidUrl(_)) | Some(FetchError::InvalidHeader(_)) => 2,
        Some(_) => 1,
        None => 2,
    }
}
