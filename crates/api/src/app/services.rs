//! Service state and the analysis pipelines shared by handlers.

use std::path::PathBuf;
use std::sync::Arc;

use intakeflow_classify::{classify_department, classify_ticket};
use intakeflow_core::{Department, DocumentFields, TicketCategory, WorkflowResult};
use intakeflow_extract::extract_entities;
use intakeflow_infra::{
    AnalysisStore, InMemoryAnalysisStore, InMemoryResumeStore, InMemoryTicketStore,
    InMemoryUserStore, ResumeStore, TicketStore, UserStore,
};
use intakeflow_oracle::{prompts, OllamaConfig, OllamaOracle, Oracle};
use intakeflow_workflow::generate_workflow;

/// Startup configuration for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub oracle: OllamaConfig,
    pub upload_dir: PathBuf,
}

/// Shared service state, injected into every handler.
pub struct AppServices {
    pub oracle: Arc<dyn Oracle>,
    pub analyses: Arc<dyn AnalysisStore>,
    pub tickets: Arc<dyn TicketStore>,
    pub resumes: Arc<dyn ResumeStore>,
    pub users: Arc<dyn UserStore>,
    pub upload_dir: PathBuf,
}

/// Production wiring: in-memory stores + Ollama oracle.
pub fn build_services(config: ApiConfig) -> AppServices {
    let oracle: Arc<dyn Oracle> = match OllamaOracle::new(config.oracle) {
        Ok(o) => Arc::new(o),
        Err(e) => {
            // A client that cannot even be constructed still must not take
            // the process down; requests will degrade per-call instead.
            tracing::warn!(error = %e, "ollama client unavailable; oracle calls will fail");
            Arc::new(intakeflow_oracle::FailingOracle)
        }
    };

    AppServices {
        oracle,
        analyses: Arc::new(InMemoryAnalysisStore::new()),
        tickets: Arc::new(InMemoryTicketStore::new()),
        resumes: Arc::new(InMemoryResumeStore::new()),
        users: Arc::new(InMemoryUserStore::new()),
        upload_dir: config.upload_dir,
    }
}

/// Outcome of the document-analysis pipeline, pre-storage.
pub struct DocumentAnalysis {
    pub department: Department,
    pub summary: String,
    pub entities: DocumentFields,
    pub workflow: WorkflowResult,
}

impl AppServices {
    /// One oracle call degraded to an empty string on failure; the rest of
    /// the pipeline is oracle-independent and must always complete.
    pub async fn complete_or_empty(&self, prompt: &str, context: &'static str) -> String {
        match self.oracle.complete(prompt).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(context, error = %e, "oracle call failed; degrading to empty");
                String::new()
            }
        }
    }

    /// Document-upload pipeline: summary → department → entities → workflow.
    ///
    /// The oracle is consulted once (for the summary); classification and
    /// the workflow decision are pure functions of the text and the
    /// extracted fields.
    pub async fn analyze_document(&self, text: &str) -> DocumentAnalysis {
        let summary = self
            .complete_or_empty(&prompts::document_summary(text), "document.summary")
            .await;

        let department = classify_department(text);

        let mut entities = extract_entities(text);
        entities.raw = Some(text.to_string());
        entities.summary = Some(summary.clone());

        let workflow = generate_workflow(department, &entities);

        DocumentAnalysis {
            department,
            summary,
            entities,
            workflow,
        }
    }

    /// Department-shaped analysis: classify, run the department's field
    /// extractor (regex + oracle), then the workflow engine over exactly
    /// those fields. Unlike the upload pipeline this surfaces the
    /// per-department extraction (vendor, parties, missing clauses,
    /// priority text) instead of generic entities.
    pub async fn analyze_by_department(&self, text: &str) -> DocumentAnalysis {
        let department = classify_department(text);
        let fields =
            intakeflow_extract::extract_department_fields(self.oracle.as_ref(), department, text)
                .await;
        let workflow = generate_workflow(department, &fields);

        DocumentAnalysis {
            department,
            summary: String::new(),
            entities: fields,
            workflow,
        }
    }

    /// Ticket pipeline: classification → summary → category suggestion.
    pub async fn analyze_ticket(
        &self,
        description: &str,
        full_description: &str,
    ) -> (TicketCategory, String, String) {
        let category = classify_ticket(description);

        let summary = self
            .complete_or_empty(&prompts::ticket_summary(full_description), "ticket.summary")
            .await;

        let suggestion = match intakeflow_oracle::generate_it_suggestion(
            self.oracle.as_ref(),
            category,
            description,
        )
        .await
        {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "suggestion generation failed; degrading to empty");
                String::new()
            }
        };

        (category, summary, suggestion)
    }
}
