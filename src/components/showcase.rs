use yew::prelude::*;

use super::trend_indicator::TrendIndicator;
use crate::trend::TrendSize;

/// Demo page: a stats grid exercising the trend badge across sizes,
/// suffixes and edge values.
#[function_component(Showcase)]
pub fn showcase() -> Html {
    log::trace!("Showcase component rendering");

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-bold mb-4">{"Trend Indicator"}</h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-title">{"Monthly Revenue"}</div>
                        <div class="stat-value">{"$45,231"}</div>
                        <div class="stat-desc">
                            <TrendIndicator value={12.345} />
                        </div>
                    </div>
                </div>
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-title">{"Churn"}</div>
                        <div class="stat-value">{"1.9%"}</div>
                        <div class="stat-desc">
                            <TrendIndicator value={-3.2} />
                        </div>
                    </div>
                </div>
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-title">{"Active Accounts"}</div>
                        <div class="stat-value">{"2,841"}</div>
                        <div class="stat-desc">
                            <TrendIndicator value={0.0} />
                        </div>
                    </div>
                </div>
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-title">{"New Signups"}</div>
                        <div class="stat-value">{"318"}</div>
                        <div class="stat-desc">
                            <TrendIndicator value={5.0} suffix="" size={TrendSize::Large} />
                        </div>
                    </div>
                </div>
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-title">{"Conversion (text only)"}</div>
                        <div class="stat-value">{"4.7%"}</div>
                        <div class="stat-desc">
                            <TrendIndicator value={0.8} show_icon={false} />
                        </div>
                    </div>
                </div>
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-title">{"Error Budget"}</div>
                        <div class="stat-value">{"99.9%"}</div>
                        <div class="stat-desc">
                            <TrendIndicator value={-0.04} size={TrendSize::Small} />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
