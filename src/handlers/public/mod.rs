// Public handlers: no JWT required. Used for token acquisition only, so
// every input here is untrusted.

pub mod auth;
