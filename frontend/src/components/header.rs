use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                <div class="brand-icon">{"🌾"}</div>
                <div>
                    <h1>{"किसान मित्र / Kisan Mitra"}</h1>
                    <p class="subtitle">{"Smart Farming Solutions"}</p>
                </div>
            </div>
            <ul class="header-features">
                <li>{"🏥 Disease Detection"}</li>
                <li>{"🤖 AI Powered"}</li>
                <li>{"📱 Mobile Friendly"}</li>
            </ul>
        </header>
    }
}
