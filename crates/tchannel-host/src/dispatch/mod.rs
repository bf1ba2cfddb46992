pub mod dispatcher;

pub use dispatcher::{CallReqHandler, CallResHandler, Dispatcher, ErrorHandler};
