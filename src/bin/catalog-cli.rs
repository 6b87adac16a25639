use clap::{Parser, Subcommand};
use reqwest::Url;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Query a running art catalog API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:4000", env = "CATALOG_URL")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Service health and collection sizes
    Health,
    /// List every painting
    Paintings,
    /// Show one painting
    Painting { id: String },
    /// Paintings held by a gallery
    ByGallery { id: String },
    /// Paintings by an artist
    ByArtist { id: String },
    /// Paintings made between two years, inclusive
    Years { min: String, max: String },
    /// Paintings whose title contains the text
    Title { text: String },
    /// Paintings with a dominant color of this name
    Color { name: String },
    /// List artists, optionally by country
    Artists { country: Option<String> },
    /// List galleries, optionally by country
    Galleries { country: Option<String> },
}

impl Commands {
    fn path_segments(&self) -> Vec<&str> {
        match self {
            Commands::Health => vec!["health"],
            Commands::Paintings => vec!["api", "paintings"],
            Commands::Painting { id } => vec!["api", "painting", id.as_str()],
            Commands::ByGallery { id } => vec!["api", "painting", "gallery", id.as_str()],
            Commands::ByArtist { id } => vec!["api", "painting", "artist", id.as_str()],
            Commands::Years { min, max } => vec!["api", "painting", "year", min.as_str(), max.as_str()],
            Commands::Title { text } => vec!["api", "painting", "title", text.as_str()],
            Commands::Color { name } => vec!["api", "painting", "color", name.as_str()],
            Commands::Artists { country } => {
                let mut segments = vec!["api", "artists"];
                segments.extend(country.as_deref());
                segments
            }
            Commands::Galleries { country } => {
                let mut segments = vec!["api", "galleries"];
                segments.extend(country.as_deref());
                segments
            }
        }
    }
}

fn endpoint(base: &str, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("{} cannot be used as a base URL", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = endpoint(&cli.url, &cli.command.path_segments())?;
    let res = client.get(url).send().await?;
    print_response(res).await?;

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();

    if !status.is_success() {
        eprintln!("Error: catalog API returned status {}", status);
        let body = res.text().await?;
        if let Some(detail) = error_detail(&body) {
            eprintln!("{}", detail);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// The `message` of a JSON error body, or the raw body when it is not one.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(json) => match json.get("message").and_then(Value::as_str) {
            Some(message) => Some(message.to_string()),
            None => Some(body.to_string()),
        },
        Err(_) => Some(body.to_string()),
    }
}
