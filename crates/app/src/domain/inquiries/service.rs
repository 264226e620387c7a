//! Inquiries service.

use std::sync::Arc;

use async_trait::async_trait;
use atelier::catalog::{Inquiry, InquiryUuid, NewInquiry};
use mockall::automock;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    domain::inquiries::errors::InquiriesServiceError,
    notifications::InquiryRelay,
    store::{
        CatalogStore, Direction, Filter, Query, Table,
        rows::{decode, decode_all, decode_first, encode},
    },
};

#[derive(Serialize)]
struct InquiryRow<'a> {
    #[serde(flatten)]
    inquiry: &'a NewInquiry,
    is_read: bool,
}

/// Result of submitting an inquiry. The inquiry is always stored; relaying
/// it to the owner's mailbox may still have failed.
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryOutcome {
    pub inquiry: Inquiry,
    pub relayed: bool,
    pub warning: Option<String>,
}

#[derive(Clone)]
pub struct StoreInquiriesService {
    store: Arc<dyn CatalogStore>,
    relay: Arc<dyn InquiryRelay>,
}

impl StoreInquiriesService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>, relay: Arc<dyn InquiryRelay>) -> Self {
        Self { store, relay }
    }
}

#[async_trait]
impl InquiriesService for StoreInquiriesService {
    async fn submit_inquiry(
        &self,
        inquiry: NewInquiry,
    ) -> Result<InquiryOutcome, InquiriesServiceError> {
        let missing = inquiry.missing_fields();

        if !missing.is_empty() {
            return Err(InquiriesServiceError::MissingFields(missing));
        }

        let row = encode(&InquiryRow {
            inquiry: &inquiry,
            is_read: false,
        })?;

        let stored: Inquiry = decode(self.store.insert(Table::Inquiries, row).await?)?;

        info!(inquiry = %stored.id, section = %stored.section, "inquiry stored");

        let (relayed, warning) = match self.relay.relay(inquiry).await {
            Ok(receipt) => (true, receipt.warning),
            Err(error) => {
                warn!(inquiry = %stored.id, %error, "inquiry stored but notification failed");

                (false, Some(error.to_string()))
            }
        };

        Ok(InquiryOutcome {
            inquiry: stored,
            relayed,
            warning,
        })
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, InquiriesServiceError> {
        let rows = self
            .store
            .select(
                Table::Inquiries,
                Query::new().order_by("created_at", Direction::Desc),
            )
            .await?;

        Ok(decode_all(rows)?)
    }

    async fn mark_read(&self, inquiry: InquiryUuid) -> Result<Inquiry, InquiriesServiceError> {
        let rows = self
            .store
            .update(
                Table::Inquiries,
                Filter::eq("id", inquiry),
                json!({ "is_read": true }),
            )
            .await?;

        Ok(decode_first(rows)?)
    }
}

#[automock]
#[async_trait]
pub trait InquiriesService: Send + Sync {
    /// Stores an inquiry, then relays it to the notification function.
    /// A failed relay is reported in the outcome, never as an error.
    async fn submit_inquiry(
        &self,
        inquiry: NewInquiry,
    ) -> Result<InquiryOutcome, InquiriesServiceError>;

    /// Retrieves all inquiries, newest first.
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, InquiriesServiceError>;

    /// Marks an inquiry as read.
    async fn mark_read(&self, inquiry: InquiryUuid) -> Result<Inquiry, InquiriesServiceError>;
}
