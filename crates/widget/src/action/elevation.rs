/// The elevation of a label when none is given.
pub const DEFAULT_TEXT_ELEVATION: f32 = 5.0;

/// Resolves the elevation of a label.
///
/// `text_elevation` wins; the legacy `elevation` is only a fallback. The
/// returned flag is true whenever a legacy value was supplied, so callers can
/// report the deprecation through their own diagnostics.
///
/// ```
/// # use fab_menu_widget::action::resolve_elevation;
/// assert_eq!(resolve_elevation(None, None), (5.0, false));
/// assert_eq!(resolve_elevation(None, Some(9.0)), (9.0, true));
/// assert_eq!(resolve_elevation(Some(2.0), Some(9.0)), (2.0, true));
/// ```
pub fn resolve_elevation(text_elevation: Option<f32>, legacy_elevation: Option<f32>) -> (f32, bool) {
    let elevation = text_elevation
        .or(legacy_elevation)
        .unwrap_or(DEFAULT_TEXT_ELEVATION);

    (elevation, legacy_elevation.is_some())
}
