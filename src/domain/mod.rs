pub mod draft;
pub mod filter;
pub mod format;
pub mod property;
pub mod property_type;

pub use draft::{DraftError, NewProperty, PropertyDraft};
pub use filter::{derive_view, ViewFilter};
pub use property::{Property, PropertyId};
pub use property_type::PropertyType;
