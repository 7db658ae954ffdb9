use tracing::Subscriber;
use tracing_subscriber::{
    fmt,
    fmt::MakeWriter,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub const DEFAULT_LOG_FILTER: &str = "jenkins_provider_credentials=info,jenkins_provider_api=info";

/// Installs the global subscriber, honouring `RUST_LOG`
pub fn init() {
    init_with_default(DEFAULT_LOG_FILTER);
}

pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    subscriber(filter, std::io::stderr).init();
}

pub fn init_dev() {
    init_with_default("jenkins_provider_credentials=debug,jenkins_provider_api=debug");
}

/// Formatting subscriber writing to `writer`; lets hosts route provider
/// logs somewhere other than stderr.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(false)
            .with_writer(writer),
    )
}
