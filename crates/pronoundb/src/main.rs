use clap::{Parser, Subcommand};
use pronoundb::client::{ClientOptions, DEFAULT_BASE};
use pronoundb::{Grammar, Platform, Pronoun, PronounDbClient};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about = "Look up pronouns on PronounDB")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up one or more accounts
    Lookup {
        /// Platform the IDs belong to (discord, github, minecraft, twitch, twitter)
        #[arg(short, long)]
        platform: Platform,

        /// PronounDB instance
        #[arg(long, default_value = DEFAULT_BASE)]
        base: Url,

        /// Account IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print every form for a pronoun code
    Describe {
        /// Pronoun code, e.g. `ht` or `avoid`. Unknown codes read as `unspecified`.
        code: String,
    },
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Lookup {
            platform,
            base,
            ids,
        } => {
            let opts = ClientOptions::new().base(base).build();
            let client = PronounDbClient::new(reqwest::Client::new(), opts);

            let (found, failure) = match client.lookup(platform, &ids).await {
                Ok(found) => (found, None),
                Err(e) => {
                    let (partial, source) = e.into_parts();
                    (partial, Some(source))
                }
            };

            for id in &ids {
                match found.get(id) {
                    Some(pronoun) => println!(
                        "{id}: {} ({}) - {}",
                        pronoun,
                        pronoun.abbreviation(),
                        sample_sentence(pronoun)
                    ),
                    None if failure.is_none() => println!("{id}: not on pronoundb"),
                    None => {}
                }
            }

            if let Some(err) = failure {
                return Err(err.into());
            }
        }
        Command::Describe { code } => {
            let pronoun = Pronoun::normalize(&code);
            if pronoun.as_str() != code {
                eprintln!("{code:?} is not a known code, showing {pronoun}");
            }
            describe(&pronoun);
        }
    }

    Ok(())
}

fn describe(pronoun: &Pronoun) {
    let genders = pronoun
        .genders()
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    println!("code:         {pronoun}");
    println!("genders:      {genders}");
    println!("label:        {}", pronoun.gender_label());
    println!("abbreviation: {}", pronoun.abbreviation());
    println!("subject:      {}", pronoun.subject());
    println!("object:       {}", pronoun.object());
    println!("possessive:   {}", pronoun.possessive());
    println!("reflexive:    {}", pronoun.reflexive());
    println!("sentence:     {}", sample_sentence(pronoun));
}

fn sample_sentence(g: &impl Grammar) -> String {
    if g.subject().is_empty() {
        return "(prefers no pronouns, use their name)".to_owned();
    }
    let subject = g.subject();
    let mut chars = subject.chars();
    let capital = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!(
        "{capital} {} here, and {} prefer{} {} own name for {}.",
        g.verb_to_be(),
        subject,
        g.verb_suffix(),
        g.possessive(),
        g.reflexive(),
    )
}
