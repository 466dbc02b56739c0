pub mod config;
pub mod logging;

pub mod checksum;
pub mod har;
pub mod index;
pub mod record;
pub mod request;

pub use record::{
    ExchangeError, ExchangeResult, RecordError, RenderMode, Response, ResponseRecord, SaveError,
};
pub use request::RequestContext;
