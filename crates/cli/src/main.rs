use addressbook_core::config::{lookup_delay_from_env_value, lookup_url_from_env_value};
use addressbook_core::{
    Address, AddressLookup, CoreConfig, GeneratedLookup, HttpLookupClient, LookupResult, Workflow,
};
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "addressbook")]
#[command(about = "Find addresses by postcode and collect them into an address book")]
struct Cli {
    /// Use built-in mock data instead of the lookup API
    #[arg(long, global = true)]
    offline: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up addresses and print the candidates
    Lookup {
        /// Postcode (at least 4 digits)
        postcode: String,
        /// Street number
        street_number: String,
    },
    /// Look up an address, pick a candidate and add it to a fresh address book
    Add {
        /// Postcode (at least 4 digits)
        postcode: String,
        /// Street number
        street_number: String,
        /// First name to attach
        #[arg(long)]
        first_name: String,
        /// Last name to attach
        #[arg(long)]
        last_name: String,
        /// 1-based position of the candidate to add
        #[arg(long, default_value_t = 1)]
        pick: usize,
    },
    /// Interactive session
    Session,
}

/// Lookup backend chosen on the command line.
enum CliLookup {
    Http(HttpLookupClient),
    Offline(GeneratedLookup),
}

impl AddressLookup for CliLookup {
    async fn lookup(&self, postcode: &str, street_number: &str) -> LookupResult<Vec<Address>> {
        match self {
            CliLookup::Http(client) => client.lookup(postcode, street_number).await,
            CliLookup::Offline(generated) => generated.lookup(postcode, street_number).await,
        }
    }
}

const SESSION_HELP: &str = "commands:
  find <postcode> <number>   look up addresses
  select <id|position>       select a candidate
  add <first> <last>         add the selected candidate to the book
  remove <id>                remove a book entry
  results                    show candidates
  book                       show the address book
  clear                      clear fields, results and errors (keeps the book)
  quit";

fn print_candidates(candidates: &[Address], selected: Option<&str>) {
    if candidates.is_empty() {
        println!("No candidates.");
        return;
    }
    for (index, address) in candidates.iter().enumerate() {
        let marker = if selected == Some(address.id.as_str()) {
            '*'
        } else {
            ' '
        };
        println!(
            "{marker}{:>2}. {} {}, {} {} [{}]",
            index + 1,
            address.street,
            address.house_number,
            address.postcode,
            address.city,
            address.id
        );
    }
}

fn print_book(book: &[Address]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(book)?);
    Ok(())
}

fn candidate_id(workflow: &Workflow<CliLookup>, token: &str) -> String {
    let results = workflow.search_results();
    token
        .parse::<usize>()
        .ok()
        .and_then(|position| position.checked_sub(1))
        .and_then(|index| results.get(index))
        .map(|address| address.id.clone())
        .unwrap_or_else(|| token.to_owned())
}

async fn run_lookup(
    workflow: &Workflow<CliLookup>,
    postcode: &str,
    street_number: &str,
) -> anyhow::Result<()> {
    workflow
        .submit_search(postcode, street_number)
        .await
        .context("Error looking up addresses")?;
    print_candidates(&workflow.search_results(), None);
    Ok(())
}

/// Picks the 1-based candidate `pick` from the current results and adds it to the book.
fn run_add(
    workflow: &Workflow<CliLookup>,
    pick: usize,
    first_name: &str,
    last_name: &str,
) -> anyhow::Result<()> {
    let id = candidate_id(workflow, &pick.to_string());
    if !workflow.select_candidate(&id) {
        bail!(
            "No candidate at position {pick} ({} found)",
            workflow.search_results().len()
        );
    }
    workflow
        .submit_personal_info(first_name, last_name)
        .context("Error adding address")?;
    print_book(&workflow.book())
}

async fn run_session(workflow: &Workflow<CliLookup>) -> anyhow::Result<()> {
    println!("{SESSION_HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["find", postcode, number] => {
                println!("Loading...");
                match workflow.submit_search(postcode, number).await {
                    Ok(_) => print_candidates(
                        &workflow.search_results(),
                        workflow.selected_id().as_deref(),
                    ),
                    Err(e) => eprintln!("{e}"),
                }
            }
            ["select", token] => {
                let id = candidate_id(workflow, token);
                if workflow.select_candidate(&id) {
                    println!("Selected {id}");
                } else {
                    eprintln!("No candidate {token}");
                }
            }
            ["add", first_name, last_name] => {
                match workflow.submit_personal_info(first_name, last_name) {
                    Ok(true) => println!("Added to address book."),
                    Ok(false) => println!("Already in address book."),
                    Err(e) => eprintln!("{e}"),
                }
            }
            ["remove", id] => {
                if workflow.remove_from_book(id) {
                    println!("Removed {id}");
                } else {
                    eprintln!("No book entry {id}");
                }
            }
            ["results"] => print_candidates(
                &workflow.search_results(),
                workflow.selected_id().as_deref(),
            ),
            ["book"] => print_book(&workflow.book())?,
            ["clear"] => workflow.clear_all(),
            ["quit"] | ["exit"] => break,
            _ => println!("{SESSION_HELP}"),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = CoreConfig::new(
        lookup_url_from_env_value(std::env::var("ADDRESSBOOK_LOOKUP_URL").ok())?,
        lookup_delay_from_env_value(std::env::var("ADDRESSBOOK_LOOKUP_DELAY_MS").ok())?,
    )?;
    let lookup = if cli.offline {
        CliLookup::Offline(GeneratedLookup::new(cfg.lookup_delay()))
    } else {
        CliLookup::Http(HttpLookupClient::new(&cfg)?)
    };
    let workflow = Workflow::new(lookup);

    match cli.command {
        Some(Commands::Lookup {
            postcode,
            street_number,
        }) => run_lookup(&workflow, &postcode, &street_number).await?,
        Some(Commands::Add {
            postcode,
            street_number,
            first_name,
            last_name,
            pick,
        }) => {
            run_lookup(&workflow, &postcode, &street_number).await?;
            run_add(&workflow, pick, &first_name, &last_name)?;
        }
        Some(Commands::Session) => run_session(&workflow).await?,
        None => {
            println!("Use 'addressbook --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline() -> Workflow<CliLookup> {
        Workflow::new(CliLookup::Offline(GeneratedLookup::new(Duration::ZERO)))
    }

    #[tokio::test]
    async fn one_shot_failures_are_errors() {
        let workflow = offline();

        let err = run_lookup(&workflow, "0000", "1").await.expect_err("no results");
        assert!(format!("{err:#}").contains("No addresses found!"));

        let err = run_lookup(&workflow, "12", "1").await.expect_err("short postcode");
        assert!(format!("{err:#}").contains("Postcode must be at least 4 digits!"));
    }

    #[tokio::test]
    async fn add_fails_on_bad_pick_or_missing_names() {
        let workflow = offline();
        run_lookup(&workflow, "1234", "1").await.expect("lookup");

        let err = run_add(&workflow, 99, "Jane", "Doe").expect_err("bad pick");
        assert!(err.to_string().starts_with("No candidate at position 99"));

        let err = run_add(&workflow, 1, " ", "Doe").expect_err("missing names");
        assert!(format!("{err:#}").contains("First name and last name fields mandatory!"));
        assert!(workflow.book().is_empty());

        run_add(&workflow, 1, "Jane", "Doe").expect("add");
        assert_eq!(workflow.book().len(), 1);
    }
}
