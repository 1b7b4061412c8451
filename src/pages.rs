//! Server-rendered HTML for the interactive surface.
//!
//! Three navigable views: Home (project overview), Predict Risk (the borrower
//! form), and Joke Break. Every interaction is a full synchronous
//! request/response cycle; the only per-session display state is whichever
//! joke is currently on screen.

use crate::errors::AppError;
use crate::handlers::{run_prediction, AppState};
use crate::jokes;
use crate::models::{BorrowerRecord, RiskLabel, FORM_FIELDS};
use axum::{extract::State, response::Html, Form};
use std::fmt::Write as _;
use std::sync::Arc;

/// The three navigable views. Navigation dispatches on this closed enum; no
/// string comparison is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Predict,
    JokeBreak,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Predict, View::JokeBreak];

    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Predict => "/predict",
            View::JokeBreak => "/jokes",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Predict => "Predict Risk",
            View::JokeBreak => "Joke Break",
        }
    }
}

/// Wraps view content in the shared page chrome (header, nav, styles).
fn layout(active: View, body: &str) -> String {
    let mut nav = String::new();
    for view in View::ALL {
        let class = if view == active { " class=\"active\"" } else { "" };
        let _ = write!(
            nav,
            "<a href=\"{}\"{}>{}</a>",
            view.path(),
            class,
            view.title()
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Credit Risk Benchmark - {title}</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #222; }}
nav {{ margin-bottom: 2rem; border-bottom: 1px solid #ddd; padding-bottom: 0.75rem; }}
nav a {{ margin-right: 1.25rem; text-decoration: none; color: #2563eb; }}
nav a.active {{ font-weight: bold; color: #111; }}
form .grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem 2rem; }}
label {{ display: block; font-size: 0.9rem; margin-top: 0.5rem; }}
input[type="number"] {{ width: 100%; padding: 0.3rem; }}
input[type="range"] {{ width: 80%; vertical-align: middle; }}
output {{ display: inline-block; min-width: 2.5rem; text-align: right; font-variant-numeric: tabular-nums; }}
button {{ margin-top: 1.25rem; padding: 0.5rem 1.5rem; font-size: 1rem; cursor: pointer; }}
.banner {{ padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; }}
.banner.danger {{ background: #fee2e2; border: 1px solid #dc2626; }}
.banner.safe {{ background: #dcfce7; border: 1px solid #16a34a; }}
.joke {{ font-size: 1.2rem; font-weight: bold; margin: 1.5rem 0; }}
.caption {{ color: #666; font-size: 0.85rem; }}
</style>
</head>
<body>
<nav>{nav}</nav>
{body}
</body>
</html>
"#,
        title = active.title(),
        nav = nav,
        body = body,
    )
}

/// Renders one form control from its [`FORM_FIELDS`] entry.
///
/// Integer fields become range sliders with a live value readout; continuous
/// fields become bounded number inputs. The `min`/`max` attributes give the
/// control-level clamping; nothing else constrains input.
fn render_controls(record: &BorrowerRecord) -> String {
    let values = record.to_feature_vector();
    let mut html = String::new();
    for (spec, value) in FORM_FIELDS.iter().zip(values) {
        if spec.integer {
            let _ = write!(
                html,
                r#"<label>{label}<br>
<input type="range" name="{name}" min="{min}" max="{max}" step="{step}" value="{value}"
 oninput="this.nextElementSibling.value = this.value">
<output>{value}</output></label>
"#,
                label = spec.label,
                name = spec.name,
                min = spec.min as i64,
                max = spec.max as i64,
                step = spec.step as i64,
                value = value as i64,
            );
        } else {
            let _ = write!(
                html,
                r#"<label>{label}<br>
<input type="number" name="{name}" min="{min}" max="{max}" step="{step}" value="{value}"></label>
"#,
                label = spec.label,
                name = spec.name,
                min = spec.min,
                max = spec.max,
                step = spec.step,
                value = value,
            );
        }
    }
    html
}

fn predict_view(record: &BorrowerRecord, result: Option<RiskLabel>) -> String {
    let banner = match result {
        Some(RiskLabel::Default) => format!(
            r#"<div class="banner danger">&#10060; {}</div>"#,
            RiskLabel::Default.message()
        ),
        Some(RiskLabel::Repay) => format!(
            r#"<div class="banner safe">&#9989; {}</div>"#,
            RiskLabel::Repay.message()
        ),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>&#128202; Credit Risk Prediction</h1>
<p>Enter the borrower's information below:</p>
{banner}
<form method="post" action="/predict">
<div class="grid">
{controls}
</div>
<button type="submit">&#128302; Predict</button>
</form>
"#,
        banner = banner,
        controls = render_controls(record),
    );
    layout(View::Predict, &body)
}

/// GET / - informational home view.
pub async fn home_page() -> Html<String> {
    let body = r#"<h1>&#128179; Credit Risk Benchmark App</h1>
<p>Welcome to the <strong>Credit Risk Benchmark App</strong>, where we assess whether a
borrower is likely to default on a loan in the next two years.</p>
<h3>&#129517; Project Workflow</h3>
<ul>
<li><strong>Data Reading</strong> from the Kaggle credit risk benchmark dataset</li>
<li><strong>Exploration &amp; Visualization</strong>: understand trends using histograms and box plots</li>
<li><strong>Feature Selection</strong> and target: <code>dlq_2yrs</code></li>
<li><strong>Outlier Removal</strong> for better quality</li>
<li><strong>SMOTE</strong> to balance the dataset</li>
<li><strong>Model Training</strong> using SVM, Random Forest, XGBoost, LGBM</li>
<li><strong>Evaluation</strong> using confusion matrix and classification report</li>
</ul>
<p class="caption">Training happens offline; only the exported classifier is loaded here.</p>
"#;
    Html(layout(View::Home, body))
}

/// GET /predict - borrower form with default control values.
pub async fn predict_page() -> Html<String> {
    Html(predict_view(&BorrowerRecord::default(), None))
}

/// POST /predict - form submission.
///
/// Runs the same inference path as the JSON API and re-renders the form with
/// the submitted values and a result banner.
pub async fn submit_prediction(
    State(state): State<Arc<AppState>>,
    Form(record): Form<BorrowerRecord>,
) -> Result<Html<String>, AppError> {
    tracing::info!("POST /predict (form)");

    let record = record.clamped();
    let outcome = run_prediction(&state, &record)?;

    Ok(Html(predict_view(&record, Some(outcome))))
}

/// GET /jokes - joke break view with a re-roll affordance.
///
/// Each render draws a fresh joke; "Another joke" simply requests the page
/// again.
pub async fn joke_page() -> Html<String> {
    let (index, joke) = jokes::random_joke(&mut rand::rng());
    tracing::debug!("Joke page showing joke {}", index);

    let body = format!(
        r#"<h1>&#129315; Money &amp; Loan Jokes</h1>
<p class="joke">&#128172; {joke}</p>
<img src="https://media.giphy.com/media/xT9IgG50Fb7Mi0prBC/giphy.gif" width="400" alt="">
<p><a href="/jokes"><button type="button">Another joke</button></a></p>
<p class="caption">Take a break - you've earned it &#128526;</p>
"#,
        joke = joke,
    );
    Html(layout(View::JokeBreak, &body))
}
