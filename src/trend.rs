//! Pure resolution core for the trend widget.
//!
//! Maps a signed value plus display options to an icon tag, class tokens and
//! a formatted label. Everything here is total over `f64` (including `-0.0`,
//! infinities and NaN) and side-effect free, so the component layer stays a
//! thin wrapper around [`resolve`].

/// Sign classification of a trend value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendCategory {
    Positive,
    Negative,
    Neutral,
}

impl TrendCategory {
    /// Classify by strict comparison against zero. `-0.0` and NaN satisfy
    /// neither comparison and land on `Neutral`.
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            TrendCategory::Positive
        } else if value < 0.0 {
            TrendCategory::Negative
        } else {
            TrendCategory::Neutral
        }
    }

    /// Icon shown next to the label for this category.
    pub fn icon(self) -> TrendIcon {
        match self {
            TrendCategory::Positive => TrendIcon::Up,
            TrendCategory::Negative => TrendIcon::Down,
            TrendCategory::Neutral => TrendIcon::Flat,
        }
    }

    /// DaisyUI text color token for this category.
    pub fn color_class(self) -> &'static str {
        match self {
            TrendCategory::Positive => "text-success",
            TrendCategory::Negative => "text-error",
            TrendCategory::Neutral => "text-base-content/60",
        }
    }
}

/// Icon tag. The component layer maps it to an actual SVG drawable; hosts
/// rendering outside Yew can do their own mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendIcon {
    Up,
    Down,
    Flat,
}

impl TrendIcon {
    /// Heroicons outline path data for this tag.
    pub(crate) fn path(self) -> &'static str {
        match self {
            TrendIcon::Up => "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
            TrendIcon::Down => "M13 17h8m0 0V9m0 8l-8-8-4 4-6-6",
            TrendIcon::Flat => "M5 12h14",
        }
    }
}

/// Widget size, mapped 1:1 to Tailwind text and icon dimension tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrendSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TrendSize {
    pub fn text_class(&self) -> &'static str {
        match self {
            TrendSize::Small => "text-xs",
            TrendSize::Medium => "text-sm",
            TrendSize::Large => "text-base",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            TrendSize::Small => "h-3 w-3",
            TrendSize::Medium => "h-4 w-4",
            TrendSize::Large => "h-5 w-5",
        }
    }
}

/// Fully resolved rendering instructions for one trend value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTrend {
    pub category: TrendCategory,
    /// `None` when the caller asked for no icon.
    pub icon: Option<TrendIcon>,
    pub color_class: &'static str,
    pub size_class: &'static str,
    pub icon_size_class: Option<&'static str>,
    pub label: String,
}

/// Resolve a value and its display options into rendering instructions.
///
/// Total over `f64`: non-finite values format the way Rust prints them
/// (`+inf`, `-inf`, `NaN`) and NaN classifies as `Neutral`. The label keeps
/// whatever sign `{:.1}` produces, so `-0.04` still classifies as `Negative`
/// but prints `-0.0`, and `-0.0` classifies as `Neutral` but prints `-0.0`.
/// The suffix is appended verbatim, without validation.
pub fn resolve(value: f64, suffix: &str, size: &TrendSize, show_icon: bool) -> ResolvedTrend {
    let category = TrendCategory::of(value);
    let label = if category == TrendCategory::Positive {
        format!("{:+.1}{}", value, suffix)
    } else {
        format!("{:.1}{}", value, suffix)
    };

    ResolvedTrend {
        category,
        icon: show_icon.then(|| category.icon()),
        color_class: category.color_class(),
        size_class: size.text_class(),
        icon_size_class: show_icon.then(|| size.icon_class()),
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_get_plus_prefix_and_up_icon() {
        let resolved = resolve(12.345, "%", &TrendSize::Medium, true);
        assert_eq!(resolved.category, TrendCategory::Positive);
        assert_eq!(resolved.icon, Some(TrendIcon::Up));
        assert_eq!(resolved.color_class, "text-success");
        assert_eq!(resolved.label, "+12.3%");
    }

    #[test]
    fn negative_values_keep_the_numeric_minus_sign() {
        let resolved = resolve(-3.2, "%", &TrendSize::Medium, true);
        assert_eq!(resolved.category, TrendCategory::Negative);
        assert_eq!(resolved.icon, Some(TrendIcon::Down));
        assert_eq!(resolved.color_class, "text-error");
        assert_eq!(resolved.label, "-3.2%");
    }

    #[test]
    fn zero_is_neutral_with_flat_icon() {
        let resolved = resolve(0.0, "%", &TrendSize::Medium, true);
        assert_eq!(resolved.category, TrendCategory::Neutral);
        assert_eq!(resolved.icon, Some(TrendIcon::Flat));
        assert_eq!(resolved.color_class, "text-base-content/60");
        assert_eq!(resolved.label, "0.0%");
    }

    #[test]
    fn suffix_is_appended_verbatim() {
        let resolved = resolve(5.0, "", &TrendSize::Large, true);
        assert_eq!(resolved.label, "+5.0");
        assert_eq!(resolved.size_class, "text-base");
        assert_eq!(resolved.icon_size_class, Some("h-5 w-5"));

        let resolved = resolve(1.0, " pts", &TrendSize::Medium, true);
        assert_eq!(resolved.label, "+1.0 pts");
    }

    #[test]
    fn hiding_the_icon_drops_both_icon_fields() {
        for value in [4.2, -4.2, 0.0] {
            let resolved = resolve(value, "%", &TrendSize::Medium, false);
            assert_eq!(resolved.icon, None);
            assert_eq!(resolved.icon_size_class, None);
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let first = resolve(7.77, "%", &TrendSize::Small, true);
        let second = resolve(7.77, "%", &TrendSize::Small, true);
        assert_eq!(first, second);
    }

    #[test]
    fn negative_near_zero_keeps_its_sign_in_the_label() {
        // Classification uses the raw value, the label uses the formatted
        // text: a tiny negative stays Negative but prints "-0.0".
        let resolved = resolve(-0.04, "%", &TrendSize::Medium, true);
        assert_eq!(resolved.category, TrendCategory::Negative);
        assert_eq!(resolved.icon, Some(TrendIcon::Down));
        assert_eq!(resolved.label, "-0.0%");
    }

    #[test]
    fn negative_zero_is_neutral() {
        let resolved = resolve(-0.0, "%", &TrendSize::Medium, true);
        assert_eq!(resolved.category, TrendCategory::Neutral);
        assert_eq!(resolved.icon, Some(TrendIcon::Flat));
        assert_eq!(resolved.label, "-0.0%");
    }

    #[test]
    fn non_finite_values_resolve_without_panicking() {
        let resolved = resolve(f64::INFINITY, "%", &TrendSize::Medium, true);
        assert_eq!(resolved.category, TrendCategory::Positive);
        assert_eq!(resolved.label, "+inf%");

        let resolved = resolve(f64::NEG_INFINITY, "%", &TrendSize::Medium, true);
        assert_eq!(resolved.category, TrendCategory::Negative);
        assert_eq!(resolved.label, "-inf%");

        let resolved = resolve(f64::NAN, "%", &TrendSize::Medium, true);
        assert_eq!(resolved.category, TrendCategory::Neutral);
        assert_eq!(resolved.label, "NaN%");
    }

    #[test]
    fn each_size_maps_to_distinct_tokens() {
        assert_eq!(TrendSize::Small.text_class(), "text-xs");
        assert_eq!(TrendSize::Medium.text_class(), "text-sm");
        assert_eq!(TrendSize::Large.text_class(), "text-base");
        assert_eq!(TrendSize::Small.icon_class(), "h-3 w-3");
        assert_eq!(TrendSize::Medium.icon_class(), "h-4 w-4");
        assert_eq!(TrendSize::Large.icon_class(), "h-5 w-5");
    }

    #[test]
    fn category_to_icon_table_is_fixed() {
        assert_eq!(TrendCategory::Positive.icon(), TrendIcon::Up);
        assert_eq!(TrendCategory::Negative.icon(), TrendIcon::Down);
        assert_eq!(TrendCategory::Neutral.icon(), TrendIcon::Flat);
    }
}
