use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Identity, Session};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Client for the hosted table/auth service.
///
/// Reads are built with [`TableClient::from`] and the [`TableQuery`]
/// combinators (equality filters, one ordering key, a row limit);
/// writes are table-scoped upsert/insert/update/delete. The service is
/// treated as a black box: this client speaks its REST dialect and
/// reports outcomes, nothing more. There are no retries and no
/// client-side caching.
pub struct TableClient {
    pub address: String,
    pub api_key: String,
    pub bearer: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl TableClient {
    pub fn new(
        address: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            api_key: api_key.into(),
            bearer: None,
            inner_client: reqwest::Client::new(),
        }
    }

    /// Attach a signed-in session's token. Without one, requests carry
    /// only the publishable key and the service applies its anonymous
    /// access rules.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.address)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.address)
    }

    fn upsert_url(&self, table: &str, on_conflict: &str) -> String {
        format!("{}?on_conflict={on_conflict}", self.rest_url(table))
    }

    fn keyed_url(&self, table: &str, key_column: &str, key: &str) -> String {
        format!("{}?{key_column}=eq.{key}", self.rest_url(table))
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        let token = self.bearer.as_deref().unwrap_or(&self.api_key);
        request.header("apikey", &self.api_key).bearer_auth(token)
    }

    async fn get(&self, url: String) -> ReqwestResult {
        self.authorize(self.inner_client.get(url)).send().await
    }
}

/// Table reads and writes
impl TableClient {
    /// Begin a read from `table`.
    pub fn from(&self, table: impl Into<String>) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.into(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Insert-or-update one row, keyed by the unique `on_conflict`
    /// column. Whether a conflicting concurrent upsert wins is the
    /// service's business.
    pub async fn upsert(
        &self,
        table: &str,
        on_conflict: &str,
        row: &impl Serialize,
    ) -> Result<(), ClientError> {
        let url = self.upsert_url(table, on_conflict);
        let request = self
            .authorize(self.inner_client.post(url))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[row]);
        ok_empty(request.send().await?).await
    }

    pub async fn insert(
        &self,
        table: &str,
        row: &impl Serialize,
    ) -> Result<(), ClientError> {
        let request = self
            .authorize(self.inner_client.post(self.rest_url(table)))
            .header("Prefer", "return=minimal")
            .json(&[row]);
        ok_empty(request.send().await?).await
    }

    /// Apply `changes` to the rows where `key_column` equals `key`.
    pub async fn update(
        &self,
        table: &str,
        key_column: &str,
        key: impl ToString,
        changes: &impl Serialize,
    ) -> Result<(), ClientError> {
        let url = self.keyed_url(table, key_column, &key.to_string());
        let request =
            self.authorize(self.inner_client.patch(url)).json(changes);
        ok_empty(request.send().await?).await
    }

    pub async fn delete(
        &self,
        table: &str,
        key_column: &str,
        key: impl ToString,
    ) -> Result<(), ClientError> {
        let url = self.keyed_url(table, key_column, &key.to_string());
        let request = self.authorize(self.inner_client.delete(url));
        ok_empty(request.send().await?).await
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Auth endpoints
impl TableClient {
    /// Exchange email/password credentials for a bearer session.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, ClientError> {
        let url = format!("{}?grant_type=password", self.auth_url("token"));
        let request = self
            .authorize(self.inner_client.post(url))
            .json(&Credentials { email, password });
        ok_body(request.send().await?).await
    }

    /// The identity behind the current bearer token.
    pub async fn identity(&self) -> Result<Identity, ClientError> {
        let response = self.get(self.auth_url("user")).await?;
        ok_body(response).await
    }

    /// Revoke the current bearer token.
    pub async fn sign_out(&self) -> Result<(), ClientError> {
        let response = self
            .authorize(self.inner_client.post(self.auth_url("logout")))
            .send()
            .await?;
        ok_empty(response).await
    }
}

/// Ordering direction for [`TableQuery::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn keyword(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// A pending read against one table.
#[must_use = "a query does nothing until fetched"]
pub struct TableQuery<'a> {
    client: &'a TableClient,
    table: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Order)>,
    limit: Option<u32>,
}

impl TableQuery<'_> {
    /// Keep only rows where `column` equals `value`.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    /// Order rows by `column`. At most one ordering key; the last call
    /// wins.
    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_string(), order));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The query string this read will send, stable for a given
    /// builder state.
    pub fn query_string(&self) -> String {
        let mut parts = vec!["select=*".to_string()];
        for (column, value) in &self.filters {
            parts.push(format!("{column}=eq.{value}"));
        }
        if let Some((column, order)) = &self.order {
            parts.push(format!("order={column}.{}", order.keyword()));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        parts.join("&")
    }

    /// Run the read, accepting any number of rows.
    pub async fn fetch<T: DeserializeOwned>(
        self,
    ) -> Result<Vec<T>, ClientError> {
        let url = format!(
            "{}?{}",
            self.client.rest_url(&self.table),
            self.query_string()
        );
        let response = self.client.get(url).await?;
        ok_body(response).await
    }

    /// Run the read, expecting at most one row. `Ok(None)` is the
    /// not-found case, distinct from a service error.
    pub async fn fetch_maybe<T: DeserializeOwned>(
        self,
    ) -> Result<Option<T>, ClientError> {
        let rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The service rejected the request; the body text is displayable.
    #[error("{1}")]
    Service(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful response into the desired type, or return
/// an appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::Service(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::Service(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TableClient {
        TableClient::new("http://localhost:54321", "publishable-key")
    }

    #[test]
    fn rest_and_auth_urls() {
        let client = client();
        assert_eq!(
            client.rest_url("news"),
            "http://localhost:54321/rest/v1/news"
        );
        assert_eq!(
            client.auth_url("token"),
            "http://localhost:54321/auth/v1/token"
        );
    }

    #[test]
    fn upsert_targets_the_conflict_column() {
        let client = client();
        assert_eq!(
            client.upsert_url("user_roles", "user_id"),
            "http://localhost:54321/rest/v1/user_roles?on_conflict=user_id"
        );
    }

    #[test]
    fn writes_are_keyed_by_equality() {
        let client = client();
        assert_eq!(
            client.keyed_url("news", "id", "42"),
            "http://localhost:54321/rest/v1/news?id=eq.42"
        );
    }
}
