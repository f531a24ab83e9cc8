// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popover adapter: configuration, content insertion, and event relay.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Insets, Rect, Size};
use peniko::Color;

use crate::arrow::ArrowDirections;
use crate::delegate::{NoDelegate, PopoverDelegate};
use crate::host::{Adaptation, PresentationHost, PresentationStyle, TraitEnvironment};

/// Height of the anchoring arrow, in the same units as the presented frame.
///
/// Reported to content builders so they can keep custom views clear of the
/// arrow edge.
pub const ARROW_HEIGHT: f64 = 12.0;

/// Error returned by [`Popover::insert_content`] when the host has not yet
/// established a frame for the presented content.
///
/// Content insertion is only meaningful after presentation has begun;
/// before that the presented size is unknown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameUnavailable;

impl fmt::Display for FrameUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no presented frame is established; present the popover before inserting content"
        )
    }
}

impl core::error::Error for FrameUnavailable {}

/// A presentable overlay anchored to a source view or rectangle.
///
/// `Popover` wraps a platform [`PresentationHost`]: it carries the
/// configuration the host reads immediately before presenting, relays the
/// host's lifecycle events to an optional [`PopoverDelegate`], and offers a
/// content-insertion hook that runs once the final presented size is known.
///
/// `V` is the application's view-handle type (a small copyable key).
/// `D` is the delegate type and defaults to [`NoDelegate`].
///
/// Configuration fields are plain and public. The host reads them exactly
/// once, in [`Popover::prepare_for_presentation`]; mutations after that
/// point do not affect an in-flight presentation.
#[derive(Debug)]
pub struct Popover<V, D = NoDelegate> {
    /// Consumer delegate receiving relayed lifecycle events.
    pub delegate: Option<D>,
    /// Edges on which the anchoring arrow may appear; `None` means
    /// [`ArrowDirections::ANY`].
    pub arrow_direction: Option<ArrowDirections>,
    /// View containing the anchor rectangle; `None` anchors the popover to
    /// its own view.
    pub source_view: Option<V>,
    /// Anchor rectangle within the source view.
    pub source_rect: Rect,
    /// Preferred size for the presented content.
    pub content_size: Size,
    /// Backdrop color; `None` keeps the host default.
    pub background_color: Option<Color>,
    /// Views that stay interactive while the popover is visible.
    pub passthrough_views: Vec<V>,
    /// Screen-edge margins restricting where the popover may be drawn;
    /// `None` means zero insets.
    pub layout_margins: Option<Insets>,
    own_view: V,
}

impl<V: Copy, D: PopoverDelegate<V>> Popover<V, D> {
    /// Create a popover rooted at `view` with default configuration.
    ///
    /// The returned adapter is intrinsically a popover-style presentation
    /// (see [`Popover::presentation_style`]) and acts as its host's
    /// delegate: hosts deliver lifecycle events by calling the relay
    /// methods on it directly.
    pub fn new(view: V) -> Self {
        Self {
            delegate: None,
            arrow_direction: None,
            source_view: None,
            source_rect: Rect::ZERO,
            content_size: Size::ZERO,
            background_color: None,
            passthrough_views: Vec::new(),
            layout_margins: None,
            own_view: view,
        }
    }

    /// The popover's own root view handle.
    pub fn view(&self) -> V {
        self.own_view
    }

    /// The modal style of this adapter. Always [`PresentationStyle::Popover`].
    pub const fn presentation_style(&self) -> PresentationStyle {
        PresentationStyle::Popover
    }

    /// Request animated dismissal of the current presentation.
    ///
    /// A no-op when nothing is presented (the [`PresentationHost::dismiss`]
    /// contract). On success the host later raises the did-dismiss event.
    pub fn close<H: PresentationHost<V>>(&self, host: &mut H) {
        host.dismiss(true);
    }

    /// Invoke `content` once with this popover, the size the host allocated
    /// for the presented content, and the arrow height ([`ARROW_HEIGHT`]).
    ///
    /// Call this only after presentation has begun; until the host has an
    /// established frame this returns [`FrameUnavailable`] and the callback
    /// is not invoked. The callback runs synchronously, exactly once.
    pub fn insert_content<H, F>(&mut self, host: &H, content: F) -> Result<(), FrameUnavailable>
    where
        H: PresentationHost<V>,
        F: FnOnce(&mut Self, Size, f64),
    {
        let frame = host.presented_frame().ok_or(FrameUnavailable)?;
        content(self, frame.size(), ARROW_HEIGHT);
        Ok(())
    }

    /// Copy the configuration onto the host.
    ///
    /// Hosts call this immediately before presenting. Unset optional fields
    /// fall back to their documented defaults: the popover's own view as
    /// the anchor, [`ArrowDirections::ANY`], and zero layout margins.
    pub fn prepare_for_presentation<H: PresentationHost<V>>(&self, host: &mut H) {
        host.set_source_view(self.source_view.unwrap_or(self.own_view));
        host.set_source_rect(self.source_rect);
        host.set_preferred_content_size(self.content_size);
        host.set_permitted_arrow_directions(self.arrow_direction.unwrap_or(ArrowDirections::ANY));
        host.set_passthrough_views(&self.passthrough_views);
        host.set_background_color(self.background_color);
        host.set_layout_margins(self.layout_margins.unwrap_or(Insets::ZERO));
    }

    /// Relay: the host needs to move the popover's anchor.
    ///
    /// Forwards the proposed rectangle and view to the delegate, which may
    /// overwrite either. Without a delegate the proposal is left untouched
    /// and the host's own repositioning proceeds.
    pub fn will_reposition(&mut self, rect: &mut Rect, view: &mut V) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_reposition(rect, view);
        }
    }

    /// Relay: the host asks whether an outside interaction may dismiss the
    /// popover.
    ///
    /// Answers with the delegate's verdict, or `true` without a delegate:
    /// by default, taps outside the popover close it.
    pub fn should_dismiss(&mut self) -> bool {
        match self.delegate.as_mut() {
            Some(delegate) => delegate.should_dismiss(),
            None => true,
        }
    }

    /// Relay: the host finished dismissing the popover.
    pub fn did_dismiss(&mut self) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_dismiss();
        }
    }

    /// How the popover adapts to a constrained presentation environment:
    /// it does not. Always [`Adaptation::None`].
    pub const fn adaptive_presentation_style(&self) -> Adaptation {
        Adaptation::None
    }

    /// Trait-collection overload of [`Popover::adaptive_presentation_style`].
    ///
    /// The answer is [`Adaptation::None`] regardless of the environment:
    /// the popover stays a popover even under compact size classes.
    pub const fn adaptive_presentation_style_for(&self, _traits: TraitEnvironment) -> Adaptation {
        Adaptation::None
    }
}
