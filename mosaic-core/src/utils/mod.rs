pub mod client_list;

pub use client_list::Filter;
