//! Fetching a recent message over IMAP

use crate::config::ImapConfig;
use crate::error::FetchError;
use crate::parser::parse_receipt_with;
use crate::types::Receipt;
use async_imap::Session;
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_native_tls::TlsStream;
use tokio_native_tls::native_tls::TlsConnector;
use tracing::{debug, info};

type ImapSession = Session<TlsStream<TcpStream>>;

/// Sequence number of the message `offset` steps back from the newest.
///
/// Returns `None` when the mailbox does not hold that many messages.
#[must_use]
pub const fn target_sequence(exists: u32, offset: u32) -> Option<u32> {
    match exists.checked_sub(offset) {
        Some(seq) if seq > 0 => Some(seq),
        _ => None,
    }
}

/// Fetch the raw RFC 822 bytes of the configured message
pub async fn fetch_raw_message(config: &ImapConfig) -> Result<(u32, Vec<u8>), FetchError> {
    info!(host = %config.host, port = config.port, "Connecting to server");
    let tcp = TcpStream::connect((config.host.as_str(), config.port)).await?;
    let tls = TlsConnector::builder().build()?;
    let tls = tokio_native_tls::TlsConnector::from(tls);
    let tls_stream = tls.connect(&config.host, tcp).await?;
    let client = async_imap::Client::new(tls_stream);
    info!("Connected");

    let mut session: ImapSession = client
        .login(&config.username, &config.password)
        .await
        .map_err(|(e, _)| FetchError::Login(e.to_string()))?;
    info!(user = %config.username, "Logged in");

    let fetched = fetch_from_session(&mut session, config).await;
    logout(&mut session).await;
    fetched
}

async fn fetch_from_session(
    session: &mut ImapSession,
    config: &ImapConfig,
) -> Result<(u32, Vec<u8>), FetchError> {
    let mailbox = session.select(&config.mailbox).await?;
    let seq = target_sequence(mailbox.exists, config.message_offset).ok_or_else(|| {
        FetchError::NoMessage {
            mailbox: config.mailbox.clone(),
            exists: mailbox.exists,
            offset: config.message_offset,
        }
    })?;
    debug!(mailbox = %config.mailbox, exists = mailbox.exists, seq, "Fetching message");

    let mut raw = None;
    let mut fetches = session.fetch(seq.to_string(), "RFC822").await?;
    while let Some(item) = fetches.next().await {
        let fetch = item?;
        if let Some(body) = fetch.body() {
            raw = Some(body.to_vec());
        }
    }
    drop(fetches);

    let raw = raw.ok_or(FetchError::EmptyBody(seq))?;
    debug!(seq, bytes = raw.len(), "Fetched message");
    Ok((seq, raw))
}

async fn logout(session: &mut ImapSession) {
    match session.logout().await {
        Ok(()) => debug!("Logged out"),
        Err(e) => debug!(error = %e, "Logout failed"),
    }
}

/// Fetch the configured message and extract its total
pub async fn fetch_receipt(config: &ImapConfig) -> Result<Receipt, FetchError> {
    let extractor = config.matching.extractor()?;
    let (seq, raw) = fetch_raw_message(config).await?;
    Ok(parse_receipt_with(seq, &raw, &extractor)?)
}
