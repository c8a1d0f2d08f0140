use std::process::ExitCode;

use devblog_reader::{BlogFeedService, BlogPost, FeedConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let as_json = std::env::args().any(|argument| argument == "--json");
    let service = match BlogFeedService::new(FeedConfig::from_env()) {
        Ok(service) => service,
        Err(error) => {
            tracing::error!(%error, "failed to build feed service");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = service.refresh().await {
        tracing::error!(%error, url = service.feed_url(), "feed refresh failed");
        return ExitCode::FAILURE;
    }

    let posts = service.posts();
    if as_json {
        match serde_json::to_string_pretty(&posts) {
            Ok(rendered) => println!("{rendered}"),
            Err(error) => {
                tracing::error!(%error, "failed to render posts as json");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for post in &posts {
            println!("{}", render_post_line(post));
        }
    }

    ExitCode::SUCCESS
}

fn render_post_line(post: &BlogPost) -> String {
    let date = post
        .published_at
        .map(|timestamp| timestamp.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "----------".to_string());
    let author = post.author.as_deref().unwrap_or("unknown");
    format!("{date}  {}  ({author})", post.title)
}
