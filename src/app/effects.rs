use crate::app::{App, Message, Model, ToastLevel};
use crate::import::FileImporter;

impl App {
    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        importer: &mut FileImporter,
        msg: &Message,
    ) {
        if let Message::RequestLoad(path) = msg {
            match importer.request(path) {
                Ok(ticket) => {
                    tracing::debug!(%ticket, in_flight = importer.in_flight(), "load requested");
                }
                Err(err) => {
                    tracing::info!(error = %err, "load rejected");
                    crate::perf::log_event("import.rejected", err.to_string());
                    model.show_toast(
                        ToastLevel::Warning,
                        format!(
                            "Invalid file type: Please select a .{} file",
                            importer.extension()
                        ),
                    );
                }
            }
        }
    }

    /// Apply every completed read, in arrival order.
    ///
    /// Returns true if anything was applied.
    pub(super) fn drain_imports(model: &mut Model, importer: &mut FileImporter) -> bool {
        let outcomes = importer.poll();
        let applied = !outcomes.is_empty();
        for outcome in outcomes {
            tracing::debug!(ticket = %outcome.ticket(), "read completed");
            *model = crate::app::update(std::mem::take(model), Message::from(outcome));
        }
        applied
    }
}
