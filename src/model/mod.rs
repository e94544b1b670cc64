/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Login form and login response
pub mod auth;
/// HTTP transport and request helper
pub mod http;
/// Request documents
pub mod requests;
/// Response documents
pub mod responses;
/// XML codec helpers
pub mod utils;
