//! Quillpost command line client.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quillpost_client::infrastructure::config::{load_dotenv_from_repo_root, PlatformConfig};
use quillpost_client::App;
use quillpost_domain::{OAuthProvider, Slug};

const USAGE: &str = "Usage: quillpost <command>

Commands:
  feed [--all]                        List active posts (every post with --all)
  post <slug>                         Show a post with its likes and comments
  preview <file-id>                   Print the preview URL of a stored image
  oauth-url <provider>                Print the provider login URL
  login <email> <password>            Sign in and show the current user
  signup <email> <password> <name>    Create an account and sign in";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quillpost_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        anyhow::bail!(USAGE);
    };

    let config = PlatformConfig::from_env().context("loading platform configuration")?;
    let app = App::from_config(&config);
    tracing::debug!(endpoint = %config.endpoint, project = %config.project_id, "Client configured");

    match (command.as_str(), &args[1..]) {
        ("feed", rest) => feed(&app, rest.iter().any(|arg| arg == "--all")).await,
        ("post", [slug]) => post(&app, slug).await,
        ("preview", [file_id]) => {
            println!("{}", app.entities.files.get_file_preview(Some(file_id)));
            Ok(())
        }
        ("oauth-url", [provider]) => {
            let provider: OAuthProvider = provider.parse()?;
            println!("{}", app.use_cases.session.begin_oauth(&provider)?);
            Ok(())
        }
        ("login", [email, password]) => {
            let user = app.use_cases.session.sign_in(email, password).await?;
            println!("Signed in as {} <{}>", user.display_name(), user.email);
            Ok(())
        }
        ("signup", [email, password, name]) => {
            let user = app.use_cases.session.sign_up(email, password, name).await?;
            println!("Created account {} for {}", user.id, user.email);
            Ok(())
        }
        (cmd, _) => anyhow::bail!("Unknown or incomplete command: {cmd}\n\n{USAGE}"),
    }
}

async fn feed(app: &App, include_inactive: bool) -> anyhow::Result<()> {
    let items = app.use_cases.posts.feed.execute(include_inactive).await?;
    if items.is_empty() {
        println!("No posts yet.");
    }
    for item in items {
        println!(
            "{:<36}  {:<8}  {}",
            item.post.slug.as_str(),
            item.post.status.as_str(),
            item.post.title
        );
        if !item.image_url.is_empty() {
            println!("{:<36}  image: {}", "", item.image_url);
        }
    }
    Ok(())
}

async fn post(app: &App, slug: &str) -> anyhow::Result<()> {
    let slug = Slug::new(slug)?;
    let page = app
        .use_cases
        .posts
        .load
        .execute(&slug)
        .await
        .with_context(|| format!("loading post {slug}"))?;

    println!("{}", page.post.title);
    println!("status: {}  author: {}", page.post.status, page.post.author_id);
    if !page.image_url.is_empty() {
        println!("image: {}", page.image_url);
    }
    println!();
    println!("{}", page.post.content);
    println!();
    println!("{} like(s), {} comment(s)", page.likes.len(), page.comments.len());
    for comment in &page.comments {
        println!(
            "  [{}] {}: {}",
            comment.created_at.format("%Y-%m-%d %H:%M"),
            comment.username,
            comment.content
        );
    }
    Ok(())
}
