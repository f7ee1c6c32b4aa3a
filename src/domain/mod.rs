pub mod contact;
pub mod section;
pub mod shared;
pub mod snapshot;
pub mod store;

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub use contact::{Contact, ContactHandle};
pub use section::Section;
pub use shared::SharedContactStore;
pub use snapshot::{SectionSnapshot, Snapshot};
pub use store::GroupedContactStore;
