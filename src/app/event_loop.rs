use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::terminal::TerminalSession;
use crate::app::{App, Message, Model, update};
use crate::document::Document;
use crate::import::FileImporter;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut session = TerminalSession::start()?;
        let size = session.terminal.size()?;
        drop(init_scope);

        let mut model = Model::new(Document::seed(), (size.width, size.height))
            .with_theme(self.theme);
        model.highlight_enabled = self.highlight_enabled;
        model.accepted_extension.clone_from(&self.extension);
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);

        let mut importer = FileImporter::new(self.extension.clone());

        // A file named on the command line goes through the same path as
        // the load prompt, but is applied before the first frame.
        if let Some(path) = self.initial_file.clone() {
            let read_scope = crate::perf::scope("app.read_file");
            let msg = Message::RequestLoad(path);
            Self::handle_message_side_effects(&mut model, &mut importer, &msg);
            if let Some(outcome) = importer.wait() {
                model = update(model, Message::from(outcome));
            }
            drop(read_scope);
        }

        Self::event_loop(&mut session.terminal, &mut model, &mut importer)
    }

    fn event_loop(
        terminal: &mut DefaultTerminal,
        model: &mut Model,
        importer: &mut FileImporter,
    ) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if Self::drain_imports(model, importer) {
                needs_render = true;
            }

            // Handle events
            let poll_ms = if needs_render {
                0
            } else if importer.in_flight() > 0 {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    crate::perf::log_event(
                        "event.message",
                        format!("frame={frame_idx} msg={msg:?}"),
                    );
                    Self::dispatch(model, importer, msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        drained += 1;
                        Self::dispatch(model, importer, msg);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    crate::perf::log_event(
                        "event.drain",
                        format!("frame={frame_idx} drained={drained}"),
                    );
                }
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3} offset={} caret_line={}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0,
                        model.viewport.offset(),
                        model.caret_line
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(model: &mut Model, importer: &mut FileImporter, msg: Message) {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, importer, &side_msg);
    }
}
