pub mod domain;
pub mod key;
pub mod mapping;
pub mod resolved;
pub mod table;

pub use domain::Domain;
pub use key::comparison_key;
pub use mapping::{CATEGORY_COLUMN, MappingEntry, MappingTable, TARGET_COLUMN};
pub use resolved::{DIAGNOSTIC_COLUMN, ResolvedRow, RowStatus, UNMAPPED_TAG};
pub use table::RecordTable;
