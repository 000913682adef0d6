pub mod record_collection;
pub mod subscriber;
mod subscriber_store;
pub mod tip;
mod tip_resolver;
mod tip_store;

pub use crate::domain::record_collection::{CollectionError, RecordCollection};
pub use crate::domain::subscriber::{Subscriber, SubscriberEmail, SubscriberStatus};
pub use crate::domain::subscriber_store::{SubscribeError, SubscriberStats, SubscriberStore};
pub use crate::domain::tip::{Tip, TipContent, TipDate, TipSource};
pub use crate::domain::tip_resolver::{Resolution, ResolveError, TipResolver};
pub use crate::domain::tip_store::{TipStore, TipStoreError};
