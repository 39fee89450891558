use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <nav class="app-header">
            <h2>{"AI-Driven Smart Waste Segregation with E-Waste Integration"}</h2>
        </nav>
    }
}
