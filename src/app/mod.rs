use tracing::Instrument;
use uuid::Uuid;

use crate::errors::GenerateError;
use crate::generate::CopyClient;
use crate::wire::GeneratedCopy;

/// What the presentation layer should show. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    Results(&'a [GeneratedCopy]),
    Idle,
}

/// Receives every view change the controller makes during a submission.
pub trait Presenter {
    fn render(&mut self, view: View<'_>);
}

#[derive(Debug, Default)]
pub struct App {
    pub product_name: String,
    pub product_description: String,
    pub result: Option<Vec<GeneratedCopy>>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Holds the app in the loading state; dropping it clears the flag.
struct LoadingGuard<'a> {
    app: &'a mut App,
}

impl<'a> LoadingGuard<'a> {
    fn begin(app: &'a mut App) -> Self {
        app.loading = true;
        app.error = None;
        app.result = None;
        Self { app }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.app.loading = false;
    }
}

impl App {
    pub fn new(product_name: impl Into<String>, product_description: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            product_description: product_description.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> View<'_> {
        if self.loading {
            View::Loading
        } else if let Some(e) = &self.error {
            View::Error(e)
        } else if let Some(r) = &self.result {
            View::Results(r)
        } else {
            View::Idle
        }
    }

    pub fn inputs_valid(&self) -> bool {
        !self.product_name.trim().is_empty() && !self.product_description.trim().is_empty()
    }

    /// Runs one submission: validate, call the client, store the outcome.
    pub async fn submit(&mut self, client: &CopyClient, presenter: &mut dyn Presenter) {
        if !self.inputs_valid() {
            self.result = None;
            self.error = Some(GenerateError::Validation.to_string());
            presenter.render(self.view());
            return;
        }

        let span = tracing::info_span!("submission", id = %Uuid::new_v4());
        self.run(client, presenter).instrument(span).await;
    }

    async fn run(&mut self, client: &CopyClient, presenter: &mut dyn Presenter) {
        tracing::info!(product = %self.product_name, "generating copy");
        {
            let guard = LoadingGuard::begin(self);
            presenter.render(guard.app.view());

            let outcome = client
                .generate(&guard.app.product_name, &guard.app.product_description)
                .await;
            match outcome {
                Ok(items) => {
                    tracing::info!(items = items.len(), "copy generated");
                    guard.app.result = Some(items);
                }
                Err(e) => guard.app.error = Some(format!("Failed to generate copy: {e}")),
            }
        }
        presenter.render(self.view());
    }
}
