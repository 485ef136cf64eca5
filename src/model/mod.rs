/******************************************************************************
   Author: KnuVerse
   Email: support@knuverse.com
   Date: 16/10/26
******************************************************************************/
/// Bearer token and authentication payloads
pub mod auth;
/// HTTP transport, request and response types
pub mod http;
/// Endpoint paths relative to the API base URL
pub mod paths;
/// Request models for API calls
pub mod requests;
