/// HTTP server command handler.
pub mod serve;

/// Interactive translation command handler.
pub mod translate;
