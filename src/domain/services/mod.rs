mod chat_poller;
mod format;
mod notifications;
mod themes;
mod timing;

pub use chat_poller::*;
pub use format::*;
pub use notifications::*;
pub use themes::*;
pub use timing::*;
