//! Table queries. All take an open `&Connection`; the store owns routing.

pub mod kv;
