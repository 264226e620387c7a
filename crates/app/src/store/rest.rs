//! REST catalog store client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    hosted::HostedProject,
    store::{
        CatalogStore, Filter, Query, StoreError, Table,
        errors::ErrorBody,
        query::filter_pairs,
    },
};

const REST_PATH: &str = "rest/v1";

/// [`CatalogStore`] over the hosted project's REST interface.
#[derive(Debug, Clone)]
pub struct RestCatalogStore {
    project: HostedProject,
    http: Client,
}

impl RestCatalogStore {
    #[must_use]
    pub fn new(project: HostedProject, http: Client) -> Self {
        Self { project, http }
    }

    fn table_url(&self, table: Table) -> String {
        self.project.endpoint(&format!("{REST_PATH}/{table}"))
    }

    async fn send(&self, table: Table, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = self
            .project
            .authorize(request)
            .send()
            .await
            .map_err(StoreError::Transport)?;

        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_else(|_| ErrorBody {
            message: Some(text),
            ..ErrorBody::default()
        });

        error!(
            table = %table,
            status = status.as_u16(),
            code = body.code.as_deref().unwrap_or_default(),
            message = body.message.as_deref().unwrap_or_default(),
            "catalog store request rejected"
        );

        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    async fn rows(response: Response) -> Result<Vec<Value>, StoreError> {
        response.json().await.map_err(StoreError::Transport)
    }
}

#[async_trait]
impl CatalogStore for RestCatalogStore {
    async fn select(&self, table: Table, query: Query) -> Result<Vec<Value>, StoreError> {
        debug!(table = %table, ?query, "selecting rows");

        let request = self.http.get(self.table_url(table)).query(&query.to_pairs());

        Self::rows(self.send(table, request).await?).await
    }

    async fn insert(&self, table: Table, row: Value) -> Result<Value, StoreError> {
        debug!(table = %table, "inserting row");

        let request = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&row);

        Self::rows(self.send(table, request).await?)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::Empty)
    }

    async fn update(
        &self,
        table: Table,
        filter: Filter,
        patch: Value,
    ) -> Result<Vec<Value>, StoreError> {
        debug!(table = %table, ?filter, "updating rows");

        let request = self
            .http
            .patch(self.table_url(table))
            .query(&filter_pairs(&filter))
            .header("Prefer", "return=representation")
            .json(&patch);

        Self::rows(self.send(table, request).await?).await
    }

    async fn delete(&self, table: Table, filter: Filter) -> Result<usize, StoreError> {
        debug!(table = %table, ?filter, "deleting rows");

        let request = self
            .http
            .delete(self.table_url(table))
            .query(&filter_pairs(&filter))
            .header("Prefer", "return=representation");

        Ok(Self::rows(self.send(table, request).await?).await?.len())
    }
}
