//! Core traits

mod api;

pub use api::CmdProxyApi;
