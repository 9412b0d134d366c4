/// Book identifiers are UUIDv7, so they sort by creation time.
pub type BookId = uuid::Uuid;
