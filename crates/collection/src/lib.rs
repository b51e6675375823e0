pub mod migrate;
pub mod selection;
pub mod stats;
pub mod store;
pub mod wheel;

pub use migrate::migrate_items;
pub use selection::{draw, exclusion_set};
pub use stats::{CollectionStats, collection_stats};
pub use store::{Collection, ListKind};
pub use wheel::resolve_index;
