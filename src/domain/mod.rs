mod amount;
mod record_error;
mod subscriber;
mod subscription_date;

pub use amount::Amount;
pub use record_error::RecordError;
pub use subscriber::{RawSubscriber, Subscriber};
pub use subscription_date::NO_END_DATE;
