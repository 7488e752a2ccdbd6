//! Build-time configuration helpers shared by the portblink crates.

#![cfg_attr(not(test), no_std)]

#[doc(hidden)]
pub mod env;
