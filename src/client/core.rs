use crate::client::endpoint::RequestPlan;
use crate::client::ClientConfig;
use crate::protocol::{ContentFilter, Payload, QueryParams, RestconfError};
use crate::transport::HttpTransport;
use crate::Result;
use reqwest::{Method, Response};

/// Async RESTCONF client.
///
/// Every operation returns the raw [`Response`], whatever its status. Use
/// [`crate::ClassifyExt`] (or [`RestconfClient::parse_error`]) to turn a
/// failed reply into a [`RestconfError`].
pub struct RestconfClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl RestconfClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn host(&self) -> &str {
        self.transport.session().host()
    }

    async fn execute(&self, plan: RequestPlan) -> Result<Response> {
        self.transport
            .send(plan.method, &plan.url, plan.body, plan.query.as_ref())
            .await
    }

    /// GET `/restconf/` (API discovery).
    pub async fn get_root(&self) -> Result<Response> {
        self.execute(RequestPlan::root(self.host())).await
    }

    /// GET a datastore resource with `content=config`.
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.get_with(path, Some(ContentFilter::Config), None).await
    }

    /// GET with explicit content filter and query parameters.
    ///
    /// A `content` key already present in `query_params` takes precedence over
    /// `content`. Pass `None` to send no `content` parameter at all.
    pub async fn get_with(
        &self,
        path: &str,
        content: Option<ContentFilter>,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        self.execute(RequestPlan::get(self.host(), path, content, query_params))
            .await
    }

    pub async fn put(
        &self,
        data: impl Into<Payload>,
        path: &str,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        let plan = RequestPlan::data(Method::PUT, self.host(), path, data.into(), query_params)?;
        self.execute(plan).await
    }

    pub async fn post(
        &self,
        data: impl Into<Payload>,
        path: &str,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        let plan = RequestPlan::data(Method::POST, self.host(), path, data.into(), query_params)?;
        self.execute(plan).await
    }

    pub async fn patch(
        &self,
        data: impl Into<Payload>,
        path: &str,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        let plan = RequestPlan::data(Method::PATCH, self.host(), path, data.into(), query_params)?;
        self.execute(plan).await
    }

    pub async fn delete(&self, path: &str, query_params: Option<QueryParams>) -> Result<Response> {
        self.execute(RequestPlan::delete(self.host(), path, query_params))
            .await
    }

    /// POST an RPC or action input under `/restconf/operations/`.
    pub async fn action(
        &self,
        data: impl Into<Payload>,
        path: &str,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        let plan = RequestPlan::action(self.host(), path, data.into(), query_params)?;
        self.execute(plan).await
    }

    /// POST a query to the vendor query API. Structured payloads are sent as JSON text.
    pub async fn query(
        &self,
        data_query: impl Into<Payload>,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        let plan = RequestPlan::query(self.host(), data_query.into(), query_params)?;
        self.execute(plan).await
    }

    /// Classify a failed reply. Same as [`crate::ClassifyExt::classify`].
    pub async fn parse_error(response: Response, yang_patch: bool) -> Result<RestconfError> {
        crate::client::ClassifyExt::classify(response, yang_patch).await
    }
}
