use looping_pager::PagerOptions;

/// The host's vertical constraint for a measure pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightConstraint {
    /// The host fixed the height; wrap-content must not override it.
    Exact(u32),
    /// The host allows any height up to a bound.
    AtMost(u32),
    /// The host imposes no bound.
    Unspecified,
}

/// The resolved height for a measure pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasuredHeight {
    /// Force this exact height.
    Exact(u32),
    /// No override; the host's own measurement stands.
    HostDefault,
}

/// Height derived from the width and a positive aspect ratio
/// (`width / ratio`, rounded to nearest).
pub fn aspect_height(width: u32, aspect_ratio: f32) -> u32 {
    (width as f32 / aspect_ratio + 0.5) as u32
}

/// The tallest child height, or `None` with no children.
pub fn wrap_content_height(child_heights: &[u32]) -> Option<u32> {
    child_heights.iter().copied().max()
}

/// Applies the sizing contract for one measure pass.
///
/// A positive aspect ratio always wins and fixes the height from the width.
/// Otherwise, when wrap-content is enabled and the host has not fixed the
/// height, the pager sizes itself to its tallest child so pages of varying
/// height do not leave it collapsed. In every other case the host's own
/// measurement stands.
pub fn resolve_height(
    options: &PagerOptions,
    width: u32,
    constraint: HeightConstraint,
    child_heights: &[u32],
) -> MeasuredHeight {
    if options.aspect_ratio > 0.0 {
        return MeasuredHeight::Exact(aspect_height(width, options.aspect_ratio));
    }
    if options.wrap_content && !matches!(constraint, HeightConstraint::Exact(_)) {
        return MeasuredHeight::Exact(wrap_content_height(child_heights).unwrap_or(0));
    }
    MeasuredHeight::HostDefault
}
