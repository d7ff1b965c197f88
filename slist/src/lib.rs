#![cfg_attr(docsrs, doc = include_str!("../README.md"))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(docsrs, deny(missing_docs))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
//! An owning, singly-linked list with fallible allocation.
//!
//! The [`SList`] type provides the classic head-oriented list toolkit:
//! *O*(1) push, pop and node moves at the head, positional access, joining,
//! tortoise-and-hare splitting, a stable merge sort, and two kinds of copies.
//!
//! - A **shallow copy** ([`SList::copy`]) is a list of references to the
//!   source list's items. Its nodes are its own, its items are not.
//! - A **deep duplicate** ([`SList::duplicate`]) is a list of clones.
//!
//! Nodes are allocated through an [`Allocator`], so running out of memory is
//! reported as [`Error::OutOfMemory`] instead of aborting the process.
//!
//! # Features
//!
//! - `std`: build against the standard library. The crate is `no_std`
//!   otherwise, and only needs `alloc` for the [`Global`] allocator.
//! - `tracing`: emit [`tracing`] events at the `TRACE` level from list
//!   operations.
//!
//! [`tracing`]: https://docs.rs/tracing

#[macro_use]
pub(crate) mod util;

mod error;
pub mod list;

#[doc(inline)]
pub use self::error::Error;
#[doc(inline)]
pub use self::list::SList;

pub use allocator_api2::alloc::{AllocError, Allocator, Global};
