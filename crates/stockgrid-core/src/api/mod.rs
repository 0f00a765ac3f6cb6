mod http_client;
mod source;

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use source::{FetchFuture, HttpStockApi, StockApi};
