//! Hostel site - City Hostel marketing website
//!
//! Server-rendered pages built from CMS content collections, plus a small
//! read-only JSON API over the same derivations.

pub mod cms_client;
pub mod config;
pub mod content;
pub mod directory_store;
pub mod error;
pub mod io;
pub mod pages;
pub mod render;
pub mod site;
pub mod submitter;

pub use config::{load_config, Config};
pub use error::{Result, SiteError};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::cms_client::HttpContentStore;
use crate::config::ContentStoreConfig;
use crate::content::ContentStore;
use crate::directory_store::DirectoryContentStore;
use crate::io::{HttpClient, ReqwestHttpClient};
use crate::site::SiteState;
use crate::submitter::{InquirySubmitter, SimulatedSubmitter};

/// Build the content store named by the configuration
pub fn build_content_store(config: &ContentStoreConfig) -> Result<Arc<dyn ContentStore>> {
    let store: Arc<dyn ContentStore> = match config {
        ContentStoreConfig::Http {
            base_url,
            api_key,
            timeout,
            ..
        } => {
            let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::with_timeout(*timeout)?);
            Arc::new(HttpContentStore::new(base_url, api_key.clone(), http))
        }
        ContentStoreConfig::Directory { path } => {
            Arc::new(DirectoryContentStore::new(path.clone()))
        }
    };
    tracing::info!("Using {} content store", config.type_name());
    Ok(store)
}

/// Assembles a [`HostelSite`], with optional injected collaborators
pub struct HostelSiteBuilder {
    config: Config,
    content: Option<Arc<dyn ContentStore>>,
    submitter: Option<Arc<dyn InquirySubmitter>>,
    cancel: Option<CancellationToken>,
}

impl HostelSiteBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            content: None,
            submitter: None,
            cancel: None,
        }
    }

    pub fn with_content_store(mut self, content: Arc<dyn ContentStore>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_submitter(mut self, submitter: Arc<dyn InquirySubmitter>) -> Self {
        self.submitter = Some(submitter);
        self
    }

    /// Stop serving when this token is cancelled instead of on Ctrl-C only
    pub fn with_cancellation_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Create the collaborators and bind the listener
    pub async fn build(self) -> Result<HostelSite> {
        let content = match self.content {
            Some(content) => content,
            None => build_content_store(&self.config.content)?,
        };
        let submitter: Arc<dyn InquirySubmitter> = match self.submitter {
            Some(submitter) => submitter,
            None => Arc::new(SimulatedSubmitter::new(self.config.contact.submit_delay)),
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            SiteError::Config(format!(
                "Failed to bind port {}: {}",
                self.config.server.port, e
            ))
        })?;

        let router = site::build_router(SiteState {
            content,
            submitter,
            config: Arc::new(self.config),
        });

        Ok(HostelSite {
            listener,
            router,
            cancel: self.cancel.unwrap_or_default(),
        })
    }
}

/// A bound, ready-to-serve site
pub struct HostelSite {
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
}

impl HostelSite {
    /// The address actually bound (useful with port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Serve until Ctrl-C or the cancellation token fires
    pub async fn start(self) -> Result<()> {
        let cancel_for_signal = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                result = tokio::signal::ctrl_c() => match result {
                    Ok(()) => {
                        tracing::info!("Shutdown signal received");
                        cancel_for_signal.cancel();
                    }
                    Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
                },
                _ = cancel_for_signal.cancelled() => {}
            }
        });

        tracing::info!("Hostel site listening on http://{}", self.local_addr()?);

        let cancel = self.cancel.clone();
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move {
                cancel.cancelled().await;
            })
            .await?;

        tracing::info!("Hostel site stopped");
        Ok(())
    }
}
