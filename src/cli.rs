// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Subcommands:
// - get: fetch any JSON URL
// - user: fetch a JSONPlaceholder user
// - github: fetch a GitHub user (and optionally their repositories)
// - github-many: fetch several GitHub users concurrently
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fetch-json",
    version = "0.1.0",
    about = "Fetch JSON from public APIs with a single HTTP GET",
    long_about = "fetch-json issues one HTTP GET per request, reads the whole body and prints it as \
                  pretty JSON. Status codes >= 400 and non-JSON bodies are reported as errors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch any URL and print the JSON body
    ///
    /// Example: fetch-json get https://jsonplaceholder.typicode.com/users/1 --status
    Get {
        /// Absolute http:// or https:// URL
        url: String,

        /// Print the status code together with the body
        #[arg(long)]
        status: bool,

        /// Extra request header as "Name: value" (can be repeated)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
    },

    /// Fetch a user from JSONPlaceholder
    ///
    /// Example: fetch-json user 1
    User {
        /// Numeric user id
        id: u32,
    },

    /// Fetch a GitHub user
    ///
    /// Example: fetch-json github oliverjam --repos
    Github {
        /// GitHub username or profile URL
        username: String,

        /// Also fetch the user's public repositories
        #[arg(long)]
        repos: bool,

        /// Output the repositories as raw JSON instead of a table
        #[arg(long, requires = "repos")]
        json: bool,
    },

    /// Fetch several GitHub users concurrently (all must succeed)
    ///
    /// Example: fetch-json github-many oliverjam starsuit
    GithubMany {
        /// GitHub usernames, results are printed in this order
        #[arg(required = true)]
        usernames: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_with_headers() {
        let cli = Cli::parse_from([
            "fetch-json",
            "get",
            "https://api.github.com/users/octocat",
            "-H",
            "User-Agent: me",
            "--header",
            "Accept: application/json",
        ]);

        match cli.command {
            Commands::Get { url, status, headers } => {
                assert_eq!(url, "https://api.github.com/users/octocat");
                assert!(!status);
                assert_eq!(headers.len(), 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_github_json_needs_repos() {
        assert!(Cli::try_parse_from(["fetch-json", "github", "oliverjam", "--json"]).is_err());

        let cli = Cli::try_parse_from(["fetch-json", "github", "oliverjam", "--repos", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Github { repos: true, json: true, .. }));
    }

    #[test]
    fn test_github_many_requires_a_name() {
        assert!(Cli::try_parse_from(["fetch-json", "github-many"]).is_err());
    }
}
