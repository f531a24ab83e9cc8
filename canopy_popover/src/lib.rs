// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Popover: a renderer-agnostic popover presentation adapter.
//!
//! ## Overview
//!
//! This crate wraps a platform's popover presentation engine behind a small
//! adapter, [`Popover`]. The adapter owns no geometry, animation, or modal
//! stack; the platform engine — abstracted as [`PresentationHost`] — does
//! all of that. The adapter's job is to:
//!
//! - carry the configuration the host reads immediately before presenting
//!   (anchor view or rectangle, preferred content size, permitted
//!   [`ArrowDirections`], backdrop color, passthrough views, layout
//!   margins), applying documented fallbacks for unset fields;
//! - offer a content-insertion hook that runs once the final presented
//!   size is known, reporting the allocated size and the fixed
//!   [`ARROW_HEIGHT`];
//! - relay the host's lifecycle events (will-reposition, should-dismiss,
//!   did-dismiss) to an optional [`PopoverDelegate`], with safe defaults
//!   when no delegate is attached.
//!
//! View references are opaque copyable handles supplied by the
//! application; this crate stores and forwards them but never
//! dereferences one.
//!
//! ## Workflow
//!
//! 1) Construct a [`Popover`] rooted at its own view handle and fill in
//!    the configuration fields.
//! 2) Hand it to the host, which calls
//!    [`Popover::prepare_for_presentation`] immediately before presenting
//!    and then raises lifecycle events against the adapter.
//! 3) Once presentation has begun, call [`Popover::insert_content`] to
//!    build custom content against the final presented size.
//! 4) Dismissal is host-driven: either an outside interaction (gated by
//!    the should-dismiss relay) or an explicit [`Popover::close`].
//!
//! ## Minimal example
//!
//! ```
//! use canopy_popover::{ArrowDirections, Popover, PresentationHost};
//! use kurbo::{Insets, Rect, Size};
//! use peniko::Color;
//!
//! // A toy host; real hosts are platform presentation engines.
//! #[derive(Default)]
//! struct Host {
//!     source_view: Option<u32>,
//!     source_rect: Rect,
//!     preferred_size: Size,
//!     arrows: ArrowDirections,
//!     frame: Option<Rect>,
//! }
//!
//! impl PresentationHost<u32> for Host {
//!     fn set_source_view(&mut self, view: u32) { self.source_view = Some(view); }
//!     fn set_source_rect(&mut self, rect: Rect) { self.source_rect = rect; }
//!     fn set_preferred_content_size(&mut self, size: Size) { self.preferred_size = size; }
//!     fn set_permitted_arrow_directions(&mut self, d: ArrowDirections) { self.arrows = d; }
//!     fn set_passthrough_views(&mut self, _views: &[u32]) {}
//!     fn set_background_color(&mut self, _color: Option<Color>) {}
//!     fn set_layout_margins(&mut self, _margins: Insets) {}
//!     fn presented_frame(&self) -> Option<Rect> { self.frame }
//!     fn dismiss(&mut self, _animated: bool) { self.frame = None; }
//! }
//!
//! let mut popover: Popover<u32> = Popover::new(100);
//! popover.source_rect = Rect::from_origin_size((10.0, 10.0), (50.0, 50.0));
//! popover.content_size = Size::new(120.0, 80.0);
//! popover.arrow_direction = Some(ArrowDirections::UP | ArrowDirections::DOWN);
//!
//! // The host reads the configuration right before presenting.
//! let mut host = Host::default();
//! popover.prepare_for_presentation(&mut host);
//! assert_eq!(host.source_view, Some(100)); // falls back to the popover's own view
//! assert_eq!(host.preferred_size, Size::new(120.0, 80.0));
//!
//! // Presentation begins; the host now has a frame for the content.
//! host.frame = Some(Rect::from_origin_size((40.0, 70.0), (120.0, 80.0)));
//! let mut inserted = Size::ZERO;
//! popover
//!     .insert_content(&host, |_, size, _arrow_height| inserted = size)
//!     .unwrap();
//! assert_eq!(inserted, Size::new(120.0, 80.0));
//!
//! // No delegate attached: outside taps are allowed to dismiss.
//! assert!(popover.should_dismiss());
//! ```
//!
//! ## Delegates
//!
//! [`PopoverDelegate`] has a default body for every method, so consumers
//! implement only the events they care about. The defaults are part of the
//! contract: repositioning proceeds unmodified, should-dismiss answers
//! `true`, did-dismiss is ignored.
//!
//! ## Adaptation policy
//!
//! Hosts that collapse popovers into sheets or full-screen presentations
//! under compact size classes can query
//! [`Popover::adaptive_presentation_style_for`]; the adapter always
//! answers [`Adaptation::None`](host::Adaptation::None) — a popover stays
//! a popover.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arrow;
pub mod delegate;
pub mod host;
pub mod popover;

pub use arrow::ArrowDirections;
pub use delegate::{NoDelegate, PopoverDelegate};
pub use host::{Adaptation, PresentationHost, PresentationStyle, SizeClass, TraitEnvironment};
pub use popover::{ARROW_HEIGHT, FrameUnavailable, Popover};
