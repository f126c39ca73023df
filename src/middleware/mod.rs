pub mod pool_guard;
pub mod request_id;

pub use pool_guard::pool_guard;
pub use request_id::{make_span, request_id, RequestId};
