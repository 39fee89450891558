use smartseg_shared::{BackLink, FindingsView, Report, ResultView};
use yew::prelude::*;

pub fn render_results(view: &ResultView) -> Html {
    match view {
        ResultView::Empty { notice, back } => html! {
            <div class="results-container empty">
                <h2>{ *notice }</h2>
                { render_back_link(back) }
            </div>
        },
        ResultView::Report(report) => render_report(report),
    }
}

fn render_report(report: &Report) -> Html {
    html! {
        <div class="results-container">
            <h1>{"♻️ Waste Detection Result"}</h1>

            <div class="result-images">
                <div class="result-card">
                    <h3>{"Uploaded Image"}</h3>
                    <img src={report.uploaded_image_url.to_string()} alt="Uploaded" />
                </div>
                {
                    match report.findings.as_ref().and_then(|f| f.output_image_url) {
                        Some(url) => html! {
                            <div class="result-card">
                                <h3>{"Detected Output"}</h3>
                                <img src={url.to_string()} alt="Output" />
                            </div>
                        },
                        None => html! {},
                    }
                }
            </div>

            <div class="detailed-results">
                <h3>{"AI Analysis"}</h3>
                <p><strong>{"Waste Type:"}</strong>{" "}{ report.waste_type }</p>
                <p><strong>{"Description:"}</strong>{" "}{ report.description }</p>
                <p><strong>{"Disposal Advice:"}</strong>{" "}{ report.disposal_advice }</p>
                { report.findings.as_ref().map(render_findings).unwrap_or_default() }
            </div>

            { render_back_link(&report.back) }
        </div>
    }
}

fn render_findings(findings: &FindingsView) -> Html {
    html! {
        <div class="result-footer">
            <p><strong>{"Detected Objects:"}</strong>{" "}{ findings.detected_objects.clone() }</p>
            <p><strong>{"Model Used:"}</strong>{" "}{ findings.model_used }</p>
        </div>
    }
}

fn render_back_link(back: &BackLink) -> Html {
    html! {
        <a class="analyze-btn" href={back.target.hash()}>{ back.label }</a>
    }
}
