use yew::prelude::*;

use crate::trend::{resolve, ResolvedTrend, TrendSize};

/// Props for [`TrendIndicator`]. Only `value` is required; the rest defaults
/// to the common dashboard presentation (percent suffix, medium size, icon
/// shown).
#[derive(Properties, PartialEq)]
pub struct TrendIndicatorProps {
    /// Signed magnitude; the sign picks icon and color.
    pub value: f64,

    /// Appended verbatim to the formatted number.
    #[prop_or(AttrValue::Static("%"))]
    pub suffix: AttrValue,

    #[prop_or_default]
    pub size: TrendSize,

    #[prop_or(true)]
    pub show_icon: bool,

    /// Extra classes merged unchanged into the computed ones.
    #[prop_or_default]
    pub class: Classes,
}

/// Inline badge summarizing a numeric trend: an arrow icon plus the value
/// formatted to one decimal, colored by sign.
#[function_component(TrendIndicator)]
pub fn trend_indicator(props: &TrendIndicatorProps) -> Html {
    let resolved = resolve(props.value, &props.suffix, &props.size, props.show_icon);
    log::trace!(
        "TrendIndicator rendering: value={}, category={:?}",
        props.value,
        resolved.category
    );

    html! {
        <span class={classes!(
            "inline-flex",
            "items-center",
            "gap-1",
            "font-medium",
            resolved.color_class,
            resolved.size_class,
            props.class.clone()
        )}>
            {trend_icon(&resolved)}
            <span>{resolved.label.clone()}</span>
        </span>
    }
}

fn trend_icon(resolved: &ResolvedTrend) -> Html {
    match (resolved.icon, resolved.icon_size_class) {
        (Some(icon), Some(size_class)) => html! {
            <svg xmlns="http://www.w3.org/2000/svg" class={size_class} fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={icon.path()} />
            </svg>
        },
        _ => html! {},
    }
}
