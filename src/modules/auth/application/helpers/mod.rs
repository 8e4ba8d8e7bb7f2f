mod owner_resolver;

pub use owner_resolver::{OwnerResolver, ResolveOwnerError};
