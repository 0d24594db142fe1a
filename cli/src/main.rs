use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{json, Value};

/// Query a running newsearch server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the server.
    #[arg(long, env = "NEWSEARCH_URL", default_value = "http://localhost:5000")]
    url: String,

    /// Print raw JSON instead of a summary.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show server status, vocabulary size and document count.
    Status,
    /// Run a free-text search.
    Search {
        query: String,
        /// Restrict results to one category ("All" searches everything).
        #[arg(long, short)]
        category: Option<String>,
        /// Show at most this many results.
        #[arg(long, short, default_value_t = 10)]
        limit: usize,
    },
    /// Fetch a single article.
    News { category: String, slug: String },
}

#[derive(Debug, Deserialize)]
struct Hit {
    title: String,
    category: String,
    date: String,
    slug: String,
    score: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url).with_context(|| format!("invalid server URL {}", cli.url))?;

    let body = send(build_request(&client, &base, &cli.command)?).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    match cli.command {
        Command::Status => {
            println!(
                "{} ({} documents, {} terms)",
                body["status"].as_str().unwrap_or("unknown"),
                body["documents_count"],
                body["vocabulary_size"]
            );
        }
        Command::Search { limit, .. } => {
            let hits: Vec<Hit> =
                serde_json::from_value(body).context("unexpected search response")?;
            if hits.is_empty() {
                println!("No results.");
            }
            for (rank, hit) in hits.iter().take(limit).enumerate() {
                println!(
                    "{:>3}. [{:.4}] {} ({}, {})\n     /news/{}/{}",
                    rank + 1,
                    hit.score,
                    hit.title,
                    hit.category,
                    hit.date,
                    hit.category.to_lowercase(),
                    hit.slug
                );
            }
        }
        Command::News { .. } => {
            for key in ["Judul", "Tanggal", "Pengarang", "Kategori", "Url", "Ringkasan"] {
                if let Some(value) = body.get(key).and_then(Value::as_str) {
                    println!("{key:>10}: {value}");
                }
            }
            if let Some(text) = body.get("Isi Berita").and_then(Value::as_str) {
                println!("\n{text}");
            }
        }
    }

    Ok(())
}

/// Append path segments to the server URL, percent-encoding each one.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("server URL {base} cannot have a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn build_request(
    client: &reqwest::Client,
    base: &Url,
    command: &Command,
) -> Result<reqwest::RequestBuilder> {
    let request = match command {
        Command::Status => client.get(endpoint(base, &[""])?),
        Command::Search {
            query, category, ..
        } => {
            let mut body = json!({ "query": query });
            if let Some(category) = category {
                body["category"] = json!(category);
            }
            client.post(endpoint(base, &["search"])?).json(&body)
        }
        Command::News { category, slug } => {
            client.get(endpoint(base, &["news", category.as_str(), slug.as_str()])?)
        }
    };
    Ok(request)
}

/// Send a request and decode the JSON body, turning `{"error": ...}`
/// responses into errors.
async fn send(request: reqwest::RequestBuilder) -> Result<Value> {
    let response = request.send().await.context("request failed")?;
    let status = response.status();
    let body: Value = response.json().await.context("response is not JSON")?;

    if !status.is_success() {
        let message = body["error"].as_str().unwrap_or("unknown error");
        bail!("server returned {status}: {message}");
    }

    Ok(body)
}
