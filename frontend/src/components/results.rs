use super::super::Model;
use shared::RecommendationRecord;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    if model.session.is_submitting() {
        return html! {
            <div class="results-loading">
                <span class="spinner"></span>
                <p>{"आलू के पत्तों का विश्लेषण कर रहे हैं..."}<br />{"Analyzing potato leaves..."}</p>
            </div>
        };
    }

    match model.session.record() {
        Some(record) => render_record(&record),
        None => html! {
            <div class="no-results-message">
                <div class="placeholder-icon">{"🌱"}</div>
                <p>{"परिणाम यहाँ दिखाए जाएंगे"}<br />{"Results will appear here"}</p>
            </div>
        },
    }
}

fn render_record(record: &RecommendationRecord) -> Html {
    let percent = record.confidence_percent;
    let tier_class = format!("tier-{}", record.tier.as_ref());

    html! {
        <div class={classes!("results-container", tier_class.clone())}>
            <div class="result-header">
                <div class="result-emoji">{ record.emoji }</div>
                <span class={classes!("badge", format!("badge-{}", record.badge))}>
                    { format!("{} / {}", record.translated_label, record.english_label) }
                </span>
                <div class="confidence-value">{ format!("{}%", percent) }</div>
                <div class="meter-label">{"विश्वसनीयता / Confidence"}</div>
            </div>

            <div class="confidence-meter">
                <div class="meter-caption">
                    <span>{"विश्वसनीयता स्तर / Confidence Level"}</span>
                    <span>{ format!("{}%", percent) }</span>
                </div>
                <div class="meter">
                    <div
                        class={classes!("meter-fill", tier_class)}
                        style={format!("width: {}%", percent)}
                    ></div>
                </div>
                <div class="meter-tier">{ record.tier.label().to_string() }</div>
            </div>

            <div class="recommendation">
                <h4>{"💊 सुझाव / Recommendation"}</h4>
                <p class="recommendation-hindi">{ record.message.hindi }</p>
                <p class="recommendation-english">{ record.message.english }</p>
                <div class="recommendation-action">
                    <p>{ format!("🎯 {}", record.action) }</p>
                </div>
            </div>

            <div class="disclaimer">
                {"⚠️ यह एक AI आधारित निदान है। गंभीर मामलों में कृषि विशेषज्ञ से सलाह लें।"}
                <br />
                {"This is an AI-based diagnosis. Consult agricultural experts for serious cases."}
            </div>
        </div>
    }
}
