use shared::{Badge, ConfidenceTier, Diagnosis, IntoEnumIterator};
use yew::prelude::*;

fn legend_marker(badge: Badge) -> &'static str {
    match badge {
        Badge::Healthy => "🟢",
        Badge::EarlyBlight => "🟡",
        Badge::LateBlight => "🔴",
        Badge::Generic => "⚪",
    }
}

pub fn render_info_section() -> Html {
    html! {
        <section class="card info-section">
            <h3>{"ℹ️ जानकारी / Information"}</h3>
            <div class="info-grid">
                { for Diagnosis::known().into_iter().map(render_diagnosis) }
            </div>
            <div class="tier-legend">
                { for ConfidenceTier::iter().map(|tier| html! {
                    <span class={classes!("tier-chip", format!("tier-{}", tier.as_ref()))}>
                        { format!("{} ({})", tier.label(), tier.range_label()) }
                    </span>
                })}
            </div>
        </section>
    }
}

fn render_diagnosis(diagnosis: Diagnosis) -> Html {
    let badge = diagnosis.badge();
    let symptoms = diagnosis.symptoms();

    html! {
        <div class="info-item">
            <div class="info-marker">{ legend_marker(badge) }</div>
            <h4 class={format!("info-title-{}", badge)}>
                { format!("{} / {}", diagnosis, diagnosis.hindi_label()) }
            </h4>
            <p>{ symptoms.hindi }<br />{ symptoms.english }</p>
        </div>
    }
}
