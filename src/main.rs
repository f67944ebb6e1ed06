use anyhow::Result;
use ro_directory::application::{
    ports::{
        notification::Notifier, rate_limit::RateLimiter, security::AdminAuthenticator,
        time::Clock, util::SlugGenerator,
    },
    services::ApplicationServices,
};
use ro_directory::config::AppConfig;
use ro_directory::domain::{
    business::BusinessRepository, contact::ContactMessageRepository,
    newsletter::NewsletterRepository,
};
use ro_directory::infrastructure::{
    notification::{HttpEmailNotifier, LogNotifier},
    rate_limit::SlidingWindowRateLimiter,
    repositories::{
        InMemoryBusinessRepository, InMemoryContactMessageRepository,
        InMemoryNewsletterRepository,
    },
    security::StaticTokenAuthenticator,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use ro_directory::presentation::http::{
    extractors::ClientIpSource, routes::build_router, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Longest rate-limit window in use; idle client logs older than this are purged.
const RATE_LIMIT_MAX_WINDOW_SECS: i64 = 60 * 60;

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

    let business_repo: Arc<dyn BusinessRepository> = Arc::new(InMemoryBusinessRepository::new());
    let contact_repo: Arc<dyn ContactMessageRepository> =
        Arc::new(InMemoryContactMessageRepository::new());
    let newsletter_repo: Arc<dyn NewsletterRepository> =
        Arc::new(InMemoryNewsletterRepository::new());

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let limiter = Arc::new(SlidingWindowRateLimiter::new(Arc::clone(&clock)));
    spawn_rate_limit_sweeper(Arc::clone(&limiter));
    let rate_limiter: Arc<dyn RateLimiter> = limiter;

    let notifier: Arc<dyn Notifier> = match config.email_settings() {
        Some(settings) => {
            tracing::info!(api_url = %settings.api_url, "email notifications enabled");
            Arc::new(HttpEmailNotifier::new(settings)?)
        }
        None => {
            tracing::info!("email notifications disabled, logging only");
            Arc::new(LogNotifier)
        }
    };

    if config.admin_api_token().is_none() {
        tracing::warn!("ADMIN_API_TOKEN not set, moderation endpoints are disabled");
    }
    let admin_authenticator: Arc<dyn AdminAuthenticator> = Arc::new(
        StaticTokenAuthenticator::new(
            config.admin_api_token().map(str::to_string),
            Arc::clone(&clock),
        ),
    );

    let services = Arc::new(ApplicationServices::new(
        business_repo,
        contact_repo,
        newsletter_repo,
        notifier,
        rate_limiter,
        admin_authenticator,
        clock,
        slugger,
    ));

    if config.client_ip_source() == ClientIpSource::FirstForwarded {
        tracing::info!(
            "rate limits keyed on the first X-Forwarded-For hop; set CLIENT_IP_SOURCE behind an appending proxy"
        );
    }
    let state = HttpState {
        services,
        client_ip_source: config.client_ip_source(),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn spawn_rate_limit_sweeper(limiter: Arc<SlidingWindowRateLimiter>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            limiter.purge_idle(RATE_LIMIT_MAX_WINDOW_SECS);
            tracing::debug!(clients = limiter.tracked_clients(), "rate limit logs purged");
        }
    });
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
