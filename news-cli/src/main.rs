mod cli;

use std::process::ExitCode;

use clap::Parser;
use news_core::{
    Article, FileSelectionStore, NewsApiClient, SearchConfig, SearchService, SearchStatus,
};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = SearchConfig::from_env();
    let service = SearchService::new(
        NewsApiClient::new(config.clone()),
        FileSelectionStore::new(slot_path()),
        config.request_timeout,
    );

    match cli.command {
        Command::Search {
            keyword,
            from,
            to,
            pages,
        } => run_search(service, &keyword, from, to, pages).await,
        Command::Show { id } => run_show(service, &id).await,
    }
}

async fn run_search(
    mut service: SearchService<NewsApiClient, FileSelectionStore>,
    keyword: &str,
    from: Option<chrono::NaiveDate>,
    to: Option<chrono::NaiveDate>,
    pages: u32,
) -> ExitCode {
    service.submit_search(keyword, from, to).await;

    let mut fetched = 1u32;
    while service.session().status() == SearchStatus::Succeeded
        && service.session().has_more()
        && fetched < pages
    {
        service.load_more().await;
        fetched += 1;
    }

    let session = service.session();
    println!("{}", session.summary());
    if session.status() == SearchStatus::Failed {
        return ExitCode::FAILURE;
    }

    for (index, article) in session.results().iter().enumerate() {
        print_listing(index + 1, article);
    }
    if session.has_more() {
        println!("(more results available; rerun with --pages {})", fetched + 1);
    }
    ExitCode::SUCCESS
}

async fn run_show(
    mut service: SearchService<NewsApiClient, FileSelectionStore>,
    id: &str,
) -> ExitCode {
    match service.resolve_article(Some(id), None).await {
        Some(article) => {
            print_detail(&article);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("This article could not be loaded.");
            eprintln!("Pick an article from a fresh `newsearch search` run and try again.");
            ExitCode::FAILURE
        }
    }
}

fn print_listing(index: usize, article: &Article) {
    let source = article
        .source
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .unwrap_or("unknown source");
    let published = article
        .published_at
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown date".to_string());

    println!("{index:3}. {}  [{source}, {published}]", article.title);
    if let Some(id) = article.id() {
        println!("     id: {id}");
    }
}

fn print_detail(article: &Article) {
    println!("{}", article.title);
    if let Some(author) = &article.author {
        println!("by {author}");
    }
    if let Some(name) = article.source.as_ref().and_then(|s| s.name.as_deref()) {
        println!("source: {name}");
    }
    match article.published_at {
        Some(dt) => println!("published: {}", dt.format("%Y-%m-%d %H:%M")),
        None => println!("published: unknown"),
    }
    println!();
    match article.body() {
        Some(body) => println!("{body}"),
        None => println!("The full text of this article is not available."),
    }
    if let Some(url) = &article.url {
        println!();
        println!("original: {url}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn slot_path() -> std::path::PathBuf {
    // Linux: ~/.config/newsearch/selected_article.json
    let mut dir = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
    dir.push("newsearch");
    dir.push("selected_article.json");
    dir
}
