// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host presentation engine contract.
//!
//! The adapter does not compute popover geometry, animate, or render a
//! backdrop. All of that belongs to a platform presentation engine, which
//! this module abstracts as [`PresentationHost`]. The host owns the
//! presentation lifecycle (not presented → presenting → presented →
//! dismissing → dismissed); the adapter only writes configuration into it
//! immediately before presentation and answers the queries it raises.
//!
//! `V` is the application's view-handle type: a small copyable key into
//! whatever view hierarchy the host manages. This crate never dereferences
//! a handle; it only stores and forwards them.

use kurbo::{Insets, Rect, Size};
use peniko::Color;

use crate::arrow::ArrowDirections;

/// A platform presentation engine, as seen by the popover adapter.
///
/// Hosts call [`Popover::prepare_for_presentation`](crate::Popover::prepare_for_presentation)
/// immediately before presenting; the adapter responds by invoking each
/// setter below exactly once. Configuration written at any other time has
/// no effect on an in-flight presentation.
pub trait PresentationHost<V> {
    /// Set the view containing the anchor rectangle.
    fn set_source_view(&mut self, view: V);

    /// Set the anchor rectangle, in the source view's coordinates.
    fn set_source_rect(&mut self, rect: Rect);

    /// Set the preferred size for the presented content.
    fn set_preferred_content_size(&mut self, size: Size);

    /// Set the edges on which the anchoring arrow may appear.
    fn set_permitted_arrow_directions(&mut self, directions: ArrowDirections);

    /// Set the views that stay interactive while the popover is visible.
    fn set_passthrough_views(&mut self, views: &[V]);

    /// Set the backdrop color, or `None` for the host default.
    fn set_background_color(&mut self, color: Option<Color>);

    /// Set the screen-edge margins within which the popover may be drawn.
    fn set_layout_margins(&mut self, margins: Insets);

    /// The frame the host has allocated for the presented content, in
    /// container coordinates.
    ///
    /// `None` until presentation has begun and the host has computed a
    /// frame.
    fn presented_frame(&self) -> Option<Rect>;

    /// Request dismissal of the current presentation.
    ///
    /// Hosts must tolerate a dismiss request while nothing is presented and
    /// treat it as a no-op.
    fn dismiss(&mut self, animated: bool);
}

/// How content is presented modally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresentationStyle {
    /// A transient overlay anchored to a source view or rectangle.
    Popover,
    /// Content covering the whole screen.
    FullScreen,
    /// A sheet sliding in over the presenting context.
    Sheet,
}

/// What a host may convert a popover into under constrained size classes.
///
/// The adapter's answer is always [`Adaptation::None`]; the other variants
/// exist so hosts can express their own policies through the same type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Adaptation {
    /// Keep the popover as a popover.
    None,
    /// Replace the popover with a full-screen presentation.
    FullScreen,
    /// Replace the popover with a sheet presentation.
    Sheet,
}

/// A size class along one axis of the presenting environment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Constrained extent, e.g. a phone-width column.
    Compact,
    /// Unconstrained extent.
    #[default]
    Regular,
}

/// The size-class environment a host supplies when asking how to adapt.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TraitEnvironment {
    /// Size class along the horizontal axis.
    pub horizontal: SizeClass,
    /// Size class along the vertical axis.
    pub vertical: SizeClass,
}

impl TraitEnvironment {
    /// An environment compact on both axes.
    pub const COMPACT: Self = Self {
        horizontal: SizeClass::Compact,
        vertical: SizeClass::Compact,
    };

    /// An environment regular on both axes.
    pub const REGULAR: Self = Self {
        horizontal: SizeClass::Regular,
        vertical: SizeClass::Regular,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_environment_defaults_to_regular() {
        assert_eq!(TraitEnvironment::default(), TraitEnvironment::REGULAR);
    }

    #[test]
    fn compact_constant_is_compact_on_both_axes() {
        assert_eq!(TraitEnvironment::COMPACT.horizontal, SizeClass::Compact);
        assert_eq!(TraitEnvironment::COMPACT.vertical, SizeClass::Compact);
    }
}
