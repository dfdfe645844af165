use anyhow::Result;
use megablog_core::{
    application::{
        dto::AuthenticatedUser,
        ports::{
            navigation::PostNavigator, storage::FileStorage, storage::ImageUpload, time::Clock,
            util::SlugGenerator,
        },
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        post::{PostReadRepository, PostStatus, PostWriteRepository},
        user::UserId,
    },
    infrastructure::{
        navigation::TracingNavigator, repositories::InMemoryPostRepository,
        storage::InMemoryFileStorage, time::SystemClock, util::DefaultSlugGenerator,
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Smallest valid GIF, used as the demo's featured image.
const PLACEHOLDER_GIF: &[u8] = b"GIF89a\x01\x00\x01\x00\x80\x00\x00\x00\x00\x00\xff\xff\xff!\xf9\x04\x01\x00\x00\x00\x00,\x00\x00\x00\x00\x01\x00\x01\x00\x00\x02\x02D\x01\x00;";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let repo = Arc::new(InMemoryPostRepository::new());
    let post_write_repo: Arc<dyn PostWriteRepository> = repo.clone();
    let post_read_repo: Arc<dyn PostReadRepository> = repo;
    let storage: Arc<dyn FileStorage> = Arc::new(InMemoryFileStorage::new(
        config.storage_bucket_id(),
        config.preview_base_url(),
        config.upload_policy(),
    ));
    let navigator: Arc<dyn PostNavigator> = Arc::new(TracingNavigator::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(
        post_write_repo,
        post_read_repo,
        storage,
        navigator,
        clock,
        slugger,
    );

    let title = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let title = if title.trim().is_empty() {
        "Hello World".to_string()
    } else {
        title
    };
    let author = AuthenticatedUser::new(UserId::new(1)?, "demo");

    let form = services.open_post_form(None);
    form.set_title(title.as_str());
    form.set_content("<p>Written from the command line.</p>");
    form.attach_image(ImageUpload::new(
        "placeholder.gif",
        "image/gif",
        PLACEHOLDER_GIF,
    ));
    let created = services
        .post_commands
        .submit_post(&author, form.to_command()?)
        .await?;
    form.close();
    println!("{}", serde_json::to_string_pretty(&created)?);

    let post = services.post_queries.load_post(created.id.parse()?).await?;
    if let Some(url) = services.post_queries.featured_image_preview(&post) {
        tracing::info!(url = %url, "featured image preview");
    }

    let form = services.open_post_form(Some(post));
    form.set_status(PostStatus::Inactive);
    let updated = services
        .post_commands
        .submit_post(&author, form.to_command()?)
        .await?;
    form.close();
    println!("{}", serde_json::to_string_pretty(&updated)?);

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
