use kernel::id::Id;

pub struct CategoryMarker;
pub type CategoryId = Id<CategoryMarker>;
