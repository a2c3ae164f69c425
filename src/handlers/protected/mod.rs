// Protected handlers: require a valid JWT. The auth middleware injects an
// `AuthUser` extension before any handler here runs.

pub mod items;
