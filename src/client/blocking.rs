//! Blocking RESTCONF client. Same routing as [`crate::RestconfClient`], one
//! synchronous network call per operation.

use crate::client::endpoint::RequestPlan;
use crate::client::ClientConfig;
use crate::protocol::{ContentFilter, Payload, QueryParams, RestconfError};
use crate::transport::BlockingHttpTransport;
use crate::Result;
use reqwest::blocking::Response;
use reqwest::Method;

pub struct BlockingRestconfClient {
    config: ClientConfig,
    transport: BlockingHttpTransport,
}

impl BlockingRestconfClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = BlockingHttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn host(&self) -> &str {
        self.transport.session().host()
    }

    fn execute(&self, plan: RequestPlan) -> Result<Response> {
        self.transport
            .send(plan.method, &plan.url, plan.body, plan.query.as_ref())
    }

    pub fn get_root(&self) -> Result<Response> {
        self.execute(RequestPlan::root(self.host()))
    }

    pub fn get(&self, path: &str) -> Result<Response> {
        self.get_with(path, Some(ContentFilter::Config), None)
    }

    pub fn get_with(
        &self,
        path: &str,
        content: Option<ContentFilter>,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        self.execute(RequestPlan::get(self.host(), path, content, query_params))
    }

    pub fn put(
        &self,
        data: impl Into<Payload>,
        path: &str,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        self.execute(RequestPlan::data(
            Method::PUT,
            self.host(),
            path,
            data.into(),
            query_params,
        )?)
    }

    pub fn post(
        &self,
        data: impl Into<Payload>,
        path: &str,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        self.execute(RequestPlan::data(
            Method::POST,
            self.host(),
            path,
            data.into(),
            query_params,
        )?)
    }

    pub fn patch(
        &self,
        data: impl Into<Payload>,
        path: &str,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        self.execute(RequestPlan::data(
            Method::PATCH,
            self.host(),
            path,
            data.into(),
            query_params,
        )?)
    }

    pub fn delete(&self, path: &str, query_params: Option<QueryParams>) -> Result<Response> {
        self.execute(RequestPlan::delete(self.host(), path, query_params))
    }

    pub fn action(
        &self,
        data: impl Into<Payload>,
        path: &str,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        self.execute(RequestPlan::action(
            self.host(),
            path,
            data.into(),
            query_params,
        )?)
    }

    pub fn query(
        &self,
        data_query: impl Into<Payload>,
        query_params: Option<QueryParams>,
    ) -> Result<Response> {
        self.execute(RequestPlan::query(
            self.host(),
            data_query.into(),
            query_params,
        )?)
    }

    pub fn parse_error(response: Response, yang_patch: bool) -> Result<RestconfError> {
        crate::client::BlockingClassifyExt::classify(response, yang_patch)
    }
}
